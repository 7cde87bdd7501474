//! Architecture Explorer Pipeline
//!
//! Turns backend-produced diagram fragments into a positioned,
//! categorized, filterable graph:
//!
//! 1. [`merge`]: combine per-page fragments, dedup nodes and edges
//! 2. [`view`]: narrow edges to one analytical view, prune orphans
//! 3. [`category`]: classify each retained node by pattern matching
//! 4. [`layout`]: assign deterministic layered coordinates
//!
//! [`pipeline::build_graph`] composes the stages behind a single
//! options struct. Every stage is a pure, synchronous, in-memory
//! transformation; inputs are immutable snapshots and each run produces
//! a fresh output.

pub mod category;
pub mod layout;
pub mod merge;
pub mod pipeline;
pub mod view;

pub use category::infer_category;
pub use merge::{filter_by_depth, merge_fragments};
pub use pipeline::{ExplorerOptions, build_graph};
pub use view::filter_by_view;
