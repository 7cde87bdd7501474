//! Diagram-Data Block Extraction
//!
//! Wiki pages embed structured diagram JSON between HTML-comment
//! markers so the explorer can read it without re-parsing mermaid.
//! This module scans page content for those blocks and deserializes
//! each into a [`DiagramData`] fragment.
//!
//! Invalid blocks (malformed JSON, shape violations) are logged and
//! skipped; extraction never fails.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::types::DiagramData;

/// Markers the generator wraps structured diagram JSON with.
pub const DATA_START_MARKER: &str = "<!-- DIAGRAM_DATA_START -->";
pub const DATA_END_MARKER: &str = "<!-- DIAGRAM_DATA_END -->";

static BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?s){}\s*(.*?)\s*{}",
        regex::escape(DATA_START_MARKER),
        regex::escape(DATA_END_MARKER),
    );
    Regex::new(&pattern).expect("marker pattern is static and valid")
});

/// Extracts all structured diagram blocks from wiki page content.
///
/// Returns the fragments in page order; an empty vec when the page has
/// no (valid) blocks.
pub fn extract_diagram_data(content: &str) -> Vec<DiagramData> {
    let mut fragments = Vec::new();

    for capture in BLOCK_PATTERN.captures_iter(content) {
        let Some(raw) = capture.get(1) else {
            continue;
        };
        match serde_json::from_str::<DiagramData>(raw.as_str()) {
            Ok(data) => fragments.push(data),
            Err(err) => {
                warn!("Skipping diagram data block with invalid JSON: {}", err);
            }
        }
    }

    fragments
}
