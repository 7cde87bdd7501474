//! Layout Command
//!
//! Runs the full explorer pipeline over fragment files and prints the
//! positioned graph as JSON for any rendering surface.

use std::path::PathBuf;

use crate::explorer::{ExplorerOptions, build_graph};
use crate::types::{ExplorerView, Result, Theme};

pub fn run(
    inputs: &[PathBuf],
    max_depth: Option<u32>,
    view: ExplorerView,
    theme: Theme,
    pretty: bool,
) -> Result<()> {
    let fragments = super::load_fragments(inputs)?;
    let options = ExplorerOptions::new(max_depth, view, theme);
    let graph = build_graph(&fragments, &options);

    let json = if pretty {
        serde_json::to_string_pretty(&graph)?
    } else {
        serde_json::to_string(&graph)?
    };
    println!("{}", json);

    Ok(())
}
