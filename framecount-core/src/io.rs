use crate::document::DesignDocument;
use crate::error::DocumentError;
use crate::schema_validation::validate_against_schema;
use crate::validation::validate_document;
use std::fs;
use std::path::Path;

/// Load a design document from a JSON file
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<DesignDocument, DocumentError> {
    let contents = fs::read_to_string(path)?;
    let document: DesignDocument = serde_json::from_str(&contents)?;
    Ok(document)
}

/// Load a design document, checking it against the document schema and the
/// structural rules before handing it out
pub fn load_validated_document<P: AsRef<Path>>(path: P) -> Result<DesignDocument, DocumentError> {
    let contents = fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&contents)?;

    validate_against_schema(&raw).map_err(DocumentError::Invalid)?;

    let document: DesignDocument = serde_json::from_value(raw)?;
    validate_document(&document).map_err(DocumentError::Invalid)?;

    Ok(document)
}

/// Save a design document to a JSON file with pretty printing
pub fn save_document<P: AsRef<Path>>(
    document: &mut DesignDocument,
    path: P,
) -> Result<(), DocumentError> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    document.mark_saved();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_json(dir: &TempDir, name: &str, value: serde_json::Value) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_save_then_load_keeps_selection() {
        let dir = TempDir::new().unwrap();
        let path = write_json(
            &dir,
            "doc.json",
            json!({
                "nodes": [
                    {"id": "1", "name": "Home", "type": "FRAME"},
                    {"id": "2", "name": "Cart", "type": "FRAME"}
                ],
                "selection": ["1", "2"]
            }),
        );

        let mut doc = load_validated_document(&path).unwrap();
        assert!(doc.select_by_id("2"));
        save_document(&mut doc, &path).unwrap();
        assert!(!doc.is_modified());

        let reloaded = load_document(&path).unwrap();
        assert_eq!(reloaded.selection, vec!["2".to_string()]);
        assert_eq!(reloaded.viewport.focus.as_deref(), Some("2"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_document(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn test_dangling_selection_fails_validation() {
        let dir = TempDir::new().unwrap();
        let path = write_json(
            &dir,
            "doc.json",
            json!({
                "nodes": [{"id": "1", "name": "Home", "type": "FRAME"}],
                "selection": ["7"]
            }),
        );

        let err = load_validated_document(&path).unwrap_err();
        match err {
            DocumentError::Invalid(errors) => {
                assert!(errors.iter().any(|e| e.contains("'7'")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
