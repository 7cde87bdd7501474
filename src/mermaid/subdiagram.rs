//! Focus Sub-Diagram Extraction
//!
//! Builds a minimal flowchart around one node: the focus node in a
//! rounded shape, its direct neighbors, and every edge touching it.
//! Used for "explain this component" contexts where the full diagram
//! is noise.

use std::collections::HashMap;

use crate::constants::simplify::{MAX_EDGE_LABEL_CHARS, MAX_FOCUS_LABEL_CHARS};
use crate::types::DiagramData;

use super::{escape_label, sanitize_id, truncate_label};

/// Builds the neighborhood flowchart for `node_id`.
///
/// Returns `None` when the node does not exist in the fragment or has
/// no connected edges; there is nothing meaningful to draw.
pub fn build_sub_diagram(node_id: &str, data: &DiagramData) -> Option<String> {
    let focus = data.nodes.iter().find(|n| n.id == node_id)?;

    let touching: Vec<_> = data
        .edges
        .iter()
        .filter(|e| e.source == node_id || e.target == node_id)
        .collect();
    if touching.is_empty() {
        return None;
    }

    let labels: HashMap<&str, &str> = data
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.label.as_str()))
        .collect();

    let mut lines = vec!["flowchart TD".to_string()];

    // Focus node gets the rounded shape; neighbors stay rectangular.
    lines.push(format!(
        "    {}(\"{}\")",
        sanitize_id(&focus.id),
        escape_label(&truncate_label(&focus.label, MAX_FOCUS_LABEL_CHARS)),
    ));

    let mut declared: Vec<&str> = vec![focus.id.as_str()];
    for edge in &touching {
        for endpoint in [edge.source.as_str(), edge.target.as_str()] {
            if declared.contains(&endpoint) {
                continue;
            }
            declared.push(endpoint);
            // Neighbors missing from the node set keep their raw id as label.
            let label = labels.get(endpoint).copied().unwrap_or(endpoint);
            lines.push(format!(
                "    {}[\"{}\"]",
                sanitize_id(endpoint),
                escape_label(&truncate_label(label, MAX_FOCUS_LABEL_CHARS)),
            ));
        }
    }

    for edge in &touching {
        let source = sanitize_id(&edge.source);
        let target = sanitize_id(&edge.target);
        match edge.label.as_deref() {
            Some(label) if !label.trim().is_empty() => lines.push(format!(
                "    {} -->|{}| {}",
                source,
                escape_label(&truncate_label(label, MAX_EDGE_LABEL_CHARS)),
                target,
            )),
            _ => lines.push(format!("    {} --> {}", source, target)),
        }
    }

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiagramEdge, DiagramNode, EdgeType};

    fn sample() -> DiagramData {
        DiagramData::from_parts(
            vec![
                DiagramNode::new("api", "API Server"),
                DiagramNode::new("db", "Database"),
                DiagramNode::new("cache", "Cache"),
                DiagramNode::new("island", "Isolated"),
            ],
            vec![
                DiagramEdge::new("api", "db", EdgeType::DataFlow).with_label("reads and writes"),
                DiagramEdge::new("cache", "api", EdgeType::ApiCall),
            ],
        )
    }

    #[test]
    fn test_single_edge_node_yields_two_nodes_one_edge() {
        let source = build_sub_diagram("db", &sample()).unwrap();
        let node_lines = source
            .lines()
            .filter(|l| l.contains('[') || l.contains("(\""))
            .count();
        let edge_lines = source.lines().filter(|l| l.contains("-->")).count();
        assert_eq!(node_lines, 2);
        assert_eq!(edge_lines, 1);
    }

    #[test]
    fn test_focus_node_is_rounded() {
        let source = build_sub_diagram("api", &sample()).unwrap();
        assert!(source.contains("api(\"API Server\")"));
        assert!(source.contains("db[\"Database\"]"));
        assert!(source.contains("cache[\"Cache\"]"));
    }

    #[test]
    fn test_all_touching_edges_included() {
        let source = build_sub_diagram("api", &sample()).unwrap();
        assert!(source.contains("api -->|reads and writes| db"));
        assert!(source.contains("cache --> api"));
    }

    #[test]
    fn test_isolated_node_returns_none() {
        assert!(build_sub_diagram("island", &sample()).is_none());
    }

    #[test]
    fn test_unknown_node_returns_none() {
        assert!(build_sub_diagram("ghost", &sample()).is_none());
    }

    #[test]
    fn test_labels_truncated_to_focus_cap() {
        let long = "x".repeat(90);
        let data = DiagramData::from_parts(
            vec![
                DiagramNode::new("a", long.as_str()),
                DiagramNode::new("b", "B"),
            ],
            vec![DiagramEdge::new("a", "b", EdgeType::Dependency)],
        );
        let source = build_sub_diagram("a", &data).unwrap();
        assert!(!source.contains(&long));
        assert!(source.contains("..."));
    }
}
