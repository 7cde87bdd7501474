//! Simplify Command
//!
//! Prints the simple-view source for a fragment file (JSON) or a raw
//! mermaid file. With `--focus`, prints the neighborhood sub-diagram of
//! one node instead.

use std::fs;
use std::path::Path;

use crate::cli::Output;
use crate::mermaid::{build_sub_diagram, simplify};
use crate::mermaid::simplify::simplify_source;
use crate::types::Result;

pub fn run(input: &Path, focus: Option<&str>) -> Result<()> {
    let is_json = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if let Some(node_id) = focus {
        if !is_json {
            Output::new().error("--focus requires a structured fragment (.json input)");
            return Ok(());
        }
        let fragments = super::load_fragments(&[input])?;
        let merged = crate::explorer::merge_fragments(&fragments);
        match build_sub_diagram(node_id, &merged) {
            Some(source) => println!("{}", source),
            None => Output::new().warning(&format!(
                "Node '{}' not found or has no connected edges",
                node_id
            )),
        }
        return Ok(());
    }

    if is_json {
        let fragments = super::load_fragments(&[input])?;
        let merged = crate::explorer::merge_fragments(&fragments);
        println!("{}", simplify(&merged));
    } else {
        let source = fs::read_to_string(input)?;
        println!("{}", simplify_source(&source));
    }

    Ok(())
}
