//! Pipeline Orchestration
//!
//! Composes the explorer stages in order (merge, depth filter, view
//! filter, categorization, layout) behind one options struct. The
//! options are the complete configuration surface callers get: depth
//! ceiling, view, theme. Nothing else reshapes the output.
//!
//! Every invocation produces a fresh [`PositionedGraph`]; nothing is
//! cached or mutated between runs. Staleness between rapid successive
//! runs is the caller's problem (last write wins at the call site).

use std::collections::HashSet;

use tracing::debug;

use crate::types::{
    DiagramData, EdgeStyle, ExplorerView, PositionedEdge, PositionedGraph, PositionedNode, Theme,
};

use super::category::infer_category;
use super::layout::assign_coordinates;
use super::merge::{filter_by_depth, merge_fragments};
use super::view::filter_by_view;

/// Caller-facing pipeline parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExplorerOptions {
    /// Inclusive depth ceiling; `None` shows every nesting level.
    pub max_depth: Option<u32>,
    pub view: ExplorerView,
    pub theme: Theme,
}

impl ExplorerOptions {
    pub fn new(max_depth: Option<u32>, view: ExplorerView, theme: Theme) -> Self {
        Self {
            max_depth,
            view,
            theme,
        }
    }
}

/// Runs the full pipeline over a set of fragments.
///
/// Total: empty input produces an empty graph, edges with unresolvable
/// endpoints are dropped silently, and every retained node receives a
/// category and coordinates.
pub fn build_graph(fragments: &[DiagramData], options: &ExplorerOptions) -> PositionedGraph {
    let merged = merge_fragments(fragments);
    let limited = filter_by_depth(&merged, options.max_depth);
    let filtered = filter_by_view(&limited, options.view);

    debug!(
        view = %options.view,
        nodes = filtered.nodes.len(),
        edges = filtered.edges.len(),
        "building positioned graph"
    );

    let points = assign_coordinates(&filtered);

    let nodes: Vec<PositionedNode> = filtered
        .nodes
        .iter()
        .map(|node| {
            let point = points
                .get(&node.id)
                .copied()
                .unwrap_or(super::layout::Point { x: 0.0, y: 0.0 });
            PositionedNode {
                id: node.id.clone(),
                category: infer_category(node),
                depth: node.depth,
                label: node.label.clone(),
                technology: node.technology.clone(),
                files: node.files.clone(),
                description: node.description.clone(),
                x: point.x,
                y: point.y,
            }
        })
        .collect();

    let present: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let edges: Vec<PositionedEdge> = filtered
        .edges
        .iter()
        .filter(|e| present.contains(e.source.as_str()) && present.contains(e.target.as_str()))
        .map(|e| PositionedEdge {
            id: e.structural_key(),
            source: e.source.clone(),
            target: e.target.clone(),
            edge_type: e.edge_type,
            label: e.label.clone(),
            style: EdgeStyle::for_edge(e.edge_type, options.theme),
        })
        .collect();

    PositionedGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiagramEdge, DiagramNode, EdgeType, ExplorerCategory};

    fn fragments() -> Vec<DiagramData> {
        vec![
            DiagramData::from_parts(
                vec![
                    DiagramNode::new("web", "React Frontend").with_depth(0),
                    DiagramNode::new("api", "API Server").with_depth(0),
                    DiagramNode::new("db", "PostgreSQL").with_depth(1),
                ],
                vec![
                    DiagramEdge::new("web", "api", EdgeType::ApiCall),
                    DiagramEdge::new("api", "db", EdgeType::DataFlow),
                ],
            ),
            // Second page repeats the API node and adds a deeper detail.
            DiagramData::from_parts(
                vec![
                    DiagramNode::new("api", "API Server").with_depth(0),
                    DiagramNode::new("worker", "Job Worker").with_depth(2),
                ],
                vec![DiagramEdge::new("api", "worker", EdgeType::Dependency)],
            ),
        ]
    }

    #[test]
    fn test_end_to_end_architecture_view() {
        let graph = build_graph(&fragments(), &ExplorerOptions::default());
        assert_eq!(graph.nodes.len(), 4);
        assert_eq!(graph.edges.len(), 3);

        let web = graph.nodes.iter().find(|n| n.id == "web").unwrap();
        assert_eq!(web.category, ExplorerCategory::Frontend);
        let db = graph.nodes.iter().find(|n| n.id == "db").unwrap();
        assert_eq!(db.category, ExplorerCategory::Database);
    }

    #[test]
    fn test_depth_limits_output() {
        let options = ExplorerOptions::new(Some(0), ExplorerView::Architecture, Theme::Light);
        let graph = build_graph(&fragments(), &options);
        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["web", "api"]);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_dataflow_view_end_to_end() {
        let options = ExplorerOptions::new(None, ExplorerView::DataFlow, Theme::Light);
        let graph = build_graph(&fragments(), &options);

        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].id, "api->db:data_flow");
        // api/db touch the surviving edge; web survives as depth 0;
        // worker (depth 2, disconnected in this view) is pruned.
        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["web", "api", "db"]);
    }

    #[test]
    fn test_theme_changes_style_not_topology() {
        let light = build_graph(
            &fragments(),
            &ExplorerOptions::new(None, ExplorerView::Architecture, Theme::Light),
        );
        let dark = build_graph(
            &fragments(),
            &ExplorerOptions::new(None, ExplorerView::Architecture, Theme::Dark),
        );

        assert_eq!(light.nodes, dark.nodes);
        assert_eq!(light.edges.len(), dark.edges.len());
        assert_ne!(light.edges[0].style.stroke, dark.edges[0].style.stroke);
    }

    #[test]
    fn test_empty_input_produces_empty_graph() {
        let graph = build_graph(&[], &ExplorerOptions::default());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_rebuild_produces_identical_output() {
        let options = ExplorerOptions::default();
        let first = build_graph(&fragments(), &options);
        let second = build_graph(&fragments(), &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dangling_edge_is_dropped() {
        let data = DiagramData::from_parts(
            vec![DiagramNode::new("A", "App")],
            vec![DiagramEdge::new("A", "missing", EdgeType::Dependency)],
        );
        let graph = build_graph(&[data], &ExplorerOptions::default());
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }
}
