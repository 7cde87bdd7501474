//! WikiGraph - Diagram Pipeline for AI-Generated Codebase Wikis
//!
//! Takes backend-produced architecture diagram fragments (nodes =
//! components, edges = relationships, each tagged with a nesting depth)
//! and turns them into a positioned, categorized, filterable graph for
//! interactive display, plus compact "simple view" mermaid sources for
//! contexts that don't need interactivity.
//!
//! ## Pipeline Stages
//!
//! - **Merge**: combine per-page fragments with first-wins dedup
//! - **Depth filter**: inclusive nesting-level ceiling
//! - **View filter**: architecture / dataflow / dependencies edge sets
//! - **Category inference**: architectural role per node, by pattern
//! - **Layout**: deterministic layered coordinates
//!
//! ## Quick Start
//!
//! ```
//! use wikigraph::{ExplorerOptions, ExplorerView, Theme, build_graph};
//! use wikigraph::extract::extract_diagram_data;
//!
//! let fragments = extract_diagram_data(page_content());
//! let options = ExplorerOptions::new(Some(1), ExplorerView::Architecture, Theme::Light);
//! let graph = build_graph(&fragments, &options);
//! assert!(graph.nodes.len() <= fragments.iter().map(|f| f.nodes.len()).sum::<usize>());
//! # fn page_content() -> &'static str { "" }
//! ```
//!
//! ## Modules
//!
//! - [`explorer`]: merge, filtering, categorization, layout
//! - [`mermaid`]: diagram-type detection, simplification, sub-diagrams
//! - [`extract`]: structured diagram blocks from wiki page content
//! - [`config`]: CLI defaults with hierarchical resolution

pub mod cli;
pub mod config;
pub mod constants;
pub mod explorer;
pub mod extract;
pub mod mermaid;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, ExplorerConfig, LogConfig};

// Error Types
pub use types::error::{Result, WikiGraphError};

// Wire Types
pub use types::{
    DiagramData, DiagramEdge, DiagramNode, EdgeType, ExplorerCategory, ExplorerView, Theme,
};

// Pipeline Output
pub use types::graph::{EdgeStyle, PositionedEdge, PositionedGraph, PositionedNode};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use explorer::{
    ExplorerOptions, build_graph, filter_by_depth, filter_by_view, infer_category, merge_fragments,
};

pub use mermaid::{DiagramKind, build_sub_diagram, simplify};

pub use extract::extract_diagram_data;
