//! Inspect Command
//!
//! Merges fragment files and prints a per-node summary: id, inferred
//! category, depth, label. Useful for checking what the explorer will
//! show before rendering anything.

use std::path::PathBuf;

use console::style;

use crate::cli::Output;
use crate::explorer::{filter_by_depth, infer_category, merge_fragments};
use crate::types::Result;

pub fn run(inputs: &[PathBuf], max_depth: Option<u32>) -> Result<()> {
    let fragments = super::load_fragments(inputs)?;
    let merged = merge_fragments(&fragments);
    let limited = filter_by_depth(&merged, max_depth);

    let output = Output::new();
    if limited.nodes.is_empty() {
        output.warning("No nodes to show");
        return Ok(());
    }

    output.section(&format!(
        "Nodes ({}), edges ({})",
        limited.nodes.len(),
        limited.edges.len()
    ));

    for node in &limited.nodes {
        let category = infer_category(node);
        println!(
            "  {:<20} {:<10} depth {}  {}",
            style(&node.id).cyan(),
            style(category.as_str()).magenta(),
            node.depth,
            node.label,
        );
    }

    Ok(())
}
