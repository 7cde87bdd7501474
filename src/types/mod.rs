//! Core Diagram Types
//!
//! Wire types for backend-produced diagram fragments and the derived
//! classification/view vocabulary used by the explorer pipeline.
//!
//! Deserialization is deliberately lenient: the backend is treated as an
//! already-validated collaborator, but missing fields degrade to safe
//! defaults (`depth` -> 0, `technology`/`description` -> none, unknown
//! edge types -> `dependency`) instead of failing.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod graph;

pub use error::{Result, WikiGraphError};
pub use graph::{EdgeStyle, PositionedEdge, PositionedGraph, PositionedNode};

// =============================================================================
// Diagram Fragments
// =============================================================================

/// One architectural component within a diagram fragment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Nesting level as produced by the backend: 0 = top-level overview,
    /// larger values = progressively more detail. Never mutated here,
    /// only filtered by.
    #[serde(default)]
    pub depth: u32,
    /// Source files associated with this component.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl DiagramNode {
    /// Creates a node with the required fields and defaults elsewhere.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            technology: None,
            description: None,
            depth: 0,
            files: Vec::new(),
        }
    }

    /// Sets the nesting depth for this node
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the technology slug for this node
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    /// Sets the free-text description for this node
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the associated source files for this node
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }
}

/// Relationship type between two diagram nodes.
///
/// Unknown values deserialize as [`EdgeType::Dependency`], the generic
/// fallback bucket for filtering and styling.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    DataFlow,
    ApiCall,
    #[default]
    #[serde(other)]
    Dependency,
}

impl EdgeType {
    /// Canonical wire name, also used in structural edge keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataFlow => "data_flow",
            Self::ApiCall => "api_call",
            Self::Dependency => "dependency",
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed relationship between two nodes in a fragment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default)]
    pub edge_type: EdgeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DiagramEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, edge_type: EdgeType) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edge_type,
            label: None,
        }
    }

    /// Sets the edge label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Structural identity key for cross-fragment deduplication:
    /// `source->target:type`. Two edges with the same key are the same
    /// edge; first occurrence wins on merge.
    pub fn structural_key(&self) -> String {
        format!("{}->{}:{}", self.source, self.target, self.edge_type.as_str())
    }
}

/// One documentation page's diagram data, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagramData {
    #[serde(default)]
    pub nodes: Vec<DiagramNode>,
    #[serde(default)]
    pub edges: Vec<DiagramEdge>,
    /// Raw diagram-description source for this fragment. Consumed only
    /// by the simplification path.
    #[serde(default)]
    pub mermaid_source: String,
    /// Diagram flavor as named by the backend (flowchart, sequence, ...).
    /// Pass-through metadata; simplification detects the actual type
    /// from the source text.
    #[serde(default = "default_diagram_type")]
    pub diagram_type: String,
    /// 1 = simple overview, 2 = detailed. Backend hint, pass-through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_level: Option<u32>,
    /// Backend-pregenerated simple view, preferred by simplification
    /// when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified_mermaid_source: Option<String>,
}

fn default_diagram_type() -> String {
    "flowchart".to_string()
}

impl Default for DiagramData {
    fn default() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }
}

impl DiagramData {
    /// Fragment with nodes and edges only; source metadata stays empty.
    pub fn from_parts(nodes: Vec<DiagramNode>, edges: Vec<DiagramEdge>) -> Self {
        Self {
            nodes,
            edges,
            mermaid_source: String::new(),
            diagram_type: default_diagram_type(),
            layer_level: None,
            simplified_mermaid_source: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

// =============================================================================
// Derived Vocabulary
// =============================================================================

/// Architectural role of a node, derived by pattern matching over its
/// label/technology/description. A rendering and grouping aid only,
/// recomputed on every pipeline run, never persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerCategory {
    Frontend,
    Backend,
    Database,
    Cache,
    Queue,
    External,
    #[default]
    General,
}

impl ExplorerCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Cache => "cache",
            Self::Queue => "queue",
            Self::External => "external",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for ExplorerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named edge-type filter controlling which relationships are shown.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerView {
    /// All edges, all nodes. Never prunes.
    #[default]
    Architecture,
    /// Only `data_flow` edges.
    DataFlow,
    /// Only `dependency` and `api_call` edges.
    Dependencies,
}

impl std::fmt::Display for ExplorerView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Architecture => write!(f, "architecture"),
            Self::DataFlow => write!(f, "dataflow"),
            Self::Dependencies => write!(f, "dependencies"),
        }
    }
}

impl std::str::FromStr for ExplorerView {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "architecture" => Ok(Self::Architecture),
            "dataflow" | "data-flow" | "data_flow" => Ok(Self::DataFlow),
            "dependencies" => Ok(Self::Dependencies),
            _ => Err(format!(
                "Unknown view: {}. Valid values: architecture, dataflow, dependencies",
                s
            )),
        }
    }
}

/// Color theme for output style hints. Affects edge stroke colors only,
/// never topology.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown theme: {}. Valid values: light, dark", s)),
        }
    }
}
