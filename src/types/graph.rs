//! Positioned Graph Output
//!
//! The renderable result of a pipeline run: categorized nodes with 2-D
//! coordinates and styled edges. Created fresh on every invocation
//! (data fetch, depth change, view change, theme change) and never
//! mutated in place.

use serde::{Deserialize, Serialize};

use super::{EdgeType, ExplorerCategory, Theme};

/// A laid-out node ready for any graph-drawing surface.
///
/// `x`/`y` are the top-left corner of the node's fixed-size bounding
/// box; the layout engine positions by center and converts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionedNode {
    pub id: String,
    pub category: ExplorerCategory,
    pub depth: u32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub x: f32,
    pub y: f32,
}

/// Theme-dependent rendering hints for an edge. Purely cosmetic;
/// topology is controlled by depth and view filters alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    /// Stroke color as a hex string.
    pub stroke: String,
    pub stroke_width: f32,
    /// Data-flow edges animate in the explorer.
    pub animated: bool,
}

impl EdgeStyle {
    /// Style hints for an edge of the given type under a theme.
    pub fn for_edge(edge_type: EdgeType, theme: Theme) -> Self {
        let stroke = match (edge_type, theme) {
            (EdgeType::DataFlow, Theme::Light) => "#2563eb",
            (EdgeType::DataFlow, Theme::Dark) => "#60a5fa",
            (EdgeType::ApiCall, Theme::Light) => "#059669",
            (EdgeType::ApiCall, Theme::Dark) => "#34d399",
            (EdgeType::Dependency, Theme::Light) => "#6b7280",
            (EdgeType::Dependency, Theme::Dark) => "#9ca3af",
        };
        Self {
            stroke: stroke.to_string(),
            stroke_width: if edge_type == EdgeType::DataFlow { 2.0 } else { 1.5 },
            animated: edge_type == EdgeType::DataFlow,
        }
    }
}

/// A laid-out edge. `id` is the structural key of the source edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionedEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub style: EdgeStyle,
}

/// Complete pipeline output for one parameter combination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PositionedGraph {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<PositionedEdge>,
}

impl PositionedGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
