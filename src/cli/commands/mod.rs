pub mod extract;
pub mod inspect;
pub mod layout;
pub mod simplify;

use std::fs;
use std::path::Path;

use crate::types::{DiagramData, Result, WikiGraphError};

/// Reads fragment files into memory. Each file holds either a single
/// `DiagramData` object or an array of them.
pub(crate) fn load_fragments(paths: &[impl AsRef<Path>]) -> Result<Vec<DiagramData>> {
    let mut fragments = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| WikiGraphError::parse(path.display().to_string(), e.to_string()))?;

        match value {
            serde_json::Value::Array(items) => {
                for item in items {
                    let fragment = serde_json::from_value(item).map_err(|e| {
                        WikiGraphError::parse(path.display().to_string(), e.to_string())
                    })?;
                    fragments.push(fragment);
                }
            }
            other => {
                let fragment = serde_json::from_value(other).map_err(|e| {
                    WikiGraphError::parse(path.display().to_string(), e.to_string())
                })?;
                fragments.push(fragment);
            }
        }
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_single_object_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nodes":[{{"id":"a","label":"App"}}],"edges":[],"mermaidSource":""}}"#
        )
        .unwrap();

        let fragments = load_fragments(&[file.path()]).unwrap();
        assert_eq!(fragments.len(), 1);
    }

    #[test]
    fn test_load_array_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"nodes":[],"edges":[],"mermaidSource":""}},{{"nodes":[],"edges":[],"mermaidSource":""}}]"#
        )
        .unwrap();

        let fragments = load_fragments(&[file.path()]).unwrap();
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_fragments(&[file.path()]).unwrap_err();
        assert!(matches!(err, WikiGraphError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_fragments(&["/nonexistent/fragments.json"]).unwrap_err();
        assert!(matches!(err, WikiGraphError::Io(_)));
    }
}
