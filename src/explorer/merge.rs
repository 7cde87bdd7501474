//! Fragment Merging & Depth Filtering
//!
//! Each documentation page contributes one diagram fragment. The
//! explorer shows a single combined graph, so fragments are merged with
//! first-occurrence-wins deduplication: node identity is the id
//! (global across fragments, not fragment-scoped), edge identity is the
//! structural key `source->target:type`.

use std::collections::HashSet;

use tracing::debug;

use crate::types::DiagramData;

/// Merges fragments into one deduplicated graph.
///
/// Nodes and edges are visited in fragment order; the first occurrence
/// of each identity wins and later duplicates are discarded, not
/// merged. Fragment metadata (`mermaid_source`, `diagram_type`, layer
/// hints) is taken from the first fragment only.
pub fn merge_fragments(fragments: &[DiagramData]) -> DiagramData {
    let mut merged = match fragments.first() {
        Some(first) => DiagramData {
            nodes: Vec::new(),
            edges: Vec::new(),
            ..first.clone()
        },
        None => return DiagramData::default(),
    };

    let mut seen_nodes: HashSet<String> = HashSet::new();
    let mut seen_edges: HashSet<String> = HashSet::new();

    for fragment in fragments {
        for node in &fragment.nodes {
            if seen_nodes.insert(node.id.clone()) {
                merged.nodes.push(node.clone());
            }
        }
        for edge in &fragment.edges {
            if seen_edges.insert(edge.structural_key()) {
                merged.edges.push(edge.clone());
            }
        }
    }

    debug!(
        fragments = fragments.len(),
        nodes = merged.nodes.len(),
        edges = merged.edges.len(),
        "merged diagram fragments"
    );

    merged
}

/// Retains nodes with `depth <= max_depth` and edges whose both
/// endpoints survive. `None` means no limit.
///
/// No orphan pruning happens here: depth filtering alone may produce
/// disconnected nodes, which is expected: "Overview" mode shows only
/// top-level nodes with no connectivity guarantee. Orphan handling is
/// the view filter's job.
pub fn filter_by_depth(data: &DiagramData, max_depth: Option<u32>) -> DiagramData {
    let Some(max_depth) = max_depth else {
        return data.clone();
    };

    let nodes: Vec<_> = data
        .nodes
        .iter()
        .filter(|n| n.depth <= max_depth)
        .cloned()
        .collect();

    let kept: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let edges = data
        .edges
        .iter()
        .filter(|e| kept.contains(e.source.as_str()) && kept.contains(e.target.as_str()))
        .cloned()
        .collect();

    DiagramData {
        nodes,
        edges,
        ..data.clone()
    }
}
