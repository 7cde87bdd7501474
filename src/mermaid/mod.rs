//! Mermaid Source Handling
//!
//! Diagram-type detection and the "simple view" derivation paths:
//! structured reduction when node/edge data is usable, text-level
//! heuristics over the raw source when it is not, and focus sub-diagram
//! extraction for single-node context.

pub mod simplify;
pub mod subdiagram;

pub use simplify::simplify;
pub use subdiagram::build_sub_diagram;

/// Diagram flavor detected from source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    Class,
    Er,
    State,
    Gantt,
    Pie,
    GitGraph,
}

impl DiagramKind {
    /// Detects the diagram kind from the first non-empty line.
    ///
    /// Anything unmatched defaults to [`DiagramKind::Flowchart`], which
    /// covers both `flowchart`/`graph` headers and headerless edge
    /// lists.
    pub fn detect(source: &str) -> Self {
        let first = source
            .lines()
            .find(|l| !l.trim().is_empty())
            .map(|l| l.trim().to_lowercase())
            .unwrap_or_default();

        if first.starts_with("sequencediagram") {
            Self::Sequence
        } else if first.starts_with("classdiagram") {
            Self::Class
        } else if first.starts_with("erdiagram") {
            Self::Er
        } else if first.starts_with("statediagram") {
            Self::State
        } else if first.starts_with("gantt") {
            Self::Gantt
        } else if first.starts_with("pie") {
            Self::Pie
        } else if first.starts_with("gitgraph") {
            Self::GitGraph
        } else {
            Self::Flowchart
        }
    }
}

/// Truncates to at most `max_chars` characters, marking the cut with an
/// ellipsis. Char-based, never splits a UTF-8 sequence.
pub(crate) fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Rewrites an id into the identifier-safe charset mermaid accepts
/// everywhere: alphanumerics and underscores.
pub(crate) fn sanitize_id(id: &str) -> String {
    let cleaned: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "node".to_string()
    } else {
        cleaned
    }
}

/// Strips characters that would break a quoted mermaid label.
pub(crate) fn escape_label(text: &str) -> String {
    text.replace('"', "'")
}
