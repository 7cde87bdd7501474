//! View-Based Edge Filtering
//!
//! Narrows the merged edge set to one analytical view, then prunes
//! nodes that lost all their edges, except depth-0 nodes, which stay
//! for top-level orientation. Without this, filtered views degenerate
//! into long lists of isolated, meaningless nodes.

use std::collections::HashSet;

use crate::types::{DiagramData, EdgeType, ExplorerView};

/// Applies a view filter to a merged graph.
///
/// `Architecture` is the identity: nodes and edges pass through
/// untouched. `DataFlow` and `Dependencies` restrict edges by type and
/// then keep only nodes that are an endpoint of a surviving edge or
/// have depth 0. An output with zero edges and only depth-0 nodes is a
/// valid "no relationships of this kind" state, not an error.
pub fn filter_by_view(data: &DiagramData, view: ExplorerView) -> DiagramData {
    if view == ExplorerView::Architecture {
        return data.clone();
    }

    let edges: Vec<_> = data
        .edges
        .iter()
        .filter(|e| match view {
            ExplorerView::Architecture => true,
            ExplorerView::DataFlow => e.edge_type == EdgeType::DataFlow,
            ExplorerView::Dependencies => {
                matches!(e.edge_type, EdgeType::Dependency | EdgeType::ApiCall)
            }
        })
        .cloned()
        .collect();

    let connected: HashSet<&str> = edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect();

    let nodes = data
        .nodes
        .iter()
        .filter(|n| n.depth == 0 || connected.contains(n.id.as_str()))
        .cloned()
        .collect();

    DiagramData {
        nodes,
        edges,
        ..data.clone()
    }
}
