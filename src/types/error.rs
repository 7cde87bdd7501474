//! Unified Error Type
//!
//! The error taxonomy here is deliberately narrow: every pipeline stage
//! is a total function over in-memory data and cannot fail. Errors only
//! arise at the edges (reading fragment files, parsing JSON, resolving
//! configuration), so that is all this type models.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WikiGraphError>;

#[derive(Debug, Error)]
pub enum WikiGraphError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl WikiGraphError {
    /// Parse error with file context.
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = WikiGraphError::parse("fragments.json", "expected array");
        assert_eq!(
            err.to_string(),
            "Parse error in fragments.json: expected array"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: WikiGraphError = io.into();
        assert!(matches!(err, WikiGraphError::Io(_)));
    }
}
