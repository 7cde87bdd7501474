//! Extract Command
//!
//! Pulls structured diagram blocks out of a generated wiki page and
//! prints them as a JSON array of fragments.

use std::fs;
use std::path::Path;

use crate::extract::extract_diagram_data;
use crate::types::Result;

pub fn run(page: &Path, pretty: bool) -> Result<()> {
    let content = fs::read_to_string(page)?;
    let fragments = extract_diagram_data(&content);

    let json = if pretty {
        serde_json::to_string_pretty(&fragments)?
    } else {
        serde_json::to_string(&fragments)?
    };
    println!("{}", json);

    Ok(())
}
