use crate::document::{DesignDocument, Node};
use std::collections::HashSet;

/// Validate the structure of a design document
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_document(document: &DesignDocument) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    validate_nodes(&document.nodes, &mut seen, &mut errors);

    for id in &document.selection {
        if !seen.contains(id.as_str()) {
            errors.push(format!("Selection references unknown node '{}'", id));
        }
    }

    if let Some(ref focus) = document.viewport.focus {
        if !seen.contains(focus.as_str()) {
            errors.push(format!("Viewport focus references unknown node '{}'", focus));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_nodes<'a>(
    nodes: &'a [Node],
    seen: &mut HashSet<&'a str>,
    errors: &mut Vec<String>,
) {
    for node in nodes {
        if node.id.trim().is_empty() {
            errors.push(format!("Node '{}' has an empty id", node.name));
        } else if !seen.insert(node.id.as_str()) {
            errors.push(format!("Duplicate node id: '{}'", node.id));
        }

        if node.node_type.trim().is_empty() {
            errors.push(format!("Node '{}' has an empty type", node.id));
        }

        validate_nodes(&node.children, seen, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> DesignDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_document() {
        let doc = document(json!({
            "nodes": [{"id": "1", "type": "FRAME", "children": [{"id": "2", "type": "TEXT"}]}],
            "selection": ["2"],
            "viewport": {"focus": "1"}
        }));

        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_duplicate_ids_across_levels() {
        let doc = document(json!({
            "nodes": [
                {"id": "1", "type": "FRAME", "children": [{"id": "2", "type": "TEXT"}]},
                {"id": "2", "type": "FRAME"}
            ]
        }));

        let errors = validate_document(&doc).unwrap_err();
        assert_eq!(errors, vec!["Duplicate node id: '2'".to_string()]);
    }

    #[test]
    fn test_collects_every_error() {
        let doc = document(json!({
            "nodes": [{"id": " ", "name": "Blank", "type": ""}],
            "selection": ["x"],
            "viewport": {"focus": "y"}
        }));

        let errors = validate_document(&doc).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
