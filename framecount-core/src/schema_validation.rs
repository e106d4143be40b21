use serde_json::Value;
use std::sync::LazyLock;

/// JSON Schema every design document must satisfy
pub const DOCUMENT_SCHEMA: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Design document",
  "type": "object",
  "properties": {
    "name": {"type": ["string", "null"]},
    "fonts": {"type": "array", "items": {"type": "string"}},
    "nodes": {"type": "array", "items": {"$ref": "#/definitions/node"}},
    "selection": {"type": "array", "items": {"type": "string"}},
    "viewport": {
      "type": "object",
      "properties": {"focus": {"type": ["string", "null"]}}
    }
  },
  "definitions": {
    "node": {
      "type": "object",
      "required": ["id", "type"],
      "properties": {
        "id": {"type": "string", "minLength": 1},
        "name": {"type": "string"},
        "type": {"type": "string", "minLength": 1},
        "x": {"type": "number"},
        "y": {"type": "number"},
        "width": {"type": "number", "minimum": 0},
        "height": {"type": "number", "minimum": 0},
        "characters": {"type": "string"},
        "font": {"type": "string"},
        "children": {"type": "array", "items": {"$ref": "#/definitions/node"}}
      }
    }
  }
}"##;

static SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(DOCUMENT_SCHEMA).expect("embedded document schema is valid JSON")
});

/// Validate a raw document against the embedded document schema
pub fn validate_against_schema(data: &Value) -> Result<(), Vec<String>> {
    validate_with_schema(&SCHEMA, data)
}

/// Validate data against a JSON Schema
/// Returns Ok(()) if valid, Err with every validation error if invalid
pub fn validate_with_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_document_passes() {
        let data = json!({
            "name": "Flows",
            "fonts": ["Inter Regular"],
            "nodes": [
                {"id": "1:1", "name": "Home", "type": "FRAME", "x": 0, "y": 0,
                 "children": [{"id": "1:2", "type": "TEXT", "characters": "Hi"}]}
            ],
            "selection": ["1:1"]
        });

        assert!(validate_against_schema(&data).is_ok());
    }

    #[test]
    fn test_node_without_type_fails() {
        let data = json!({"nodes": [{"id": "1:1", "name": "Home"}]});

        let errors = validate_against_schema(&data).unwrap_err();
        assert!(!errors.is_empty());
        assert!(errors[0].contains("/nodes/0"));
    }

    #[test]
    fn test_nested_node_is_checked() {
        let data = json!({
            "nodes": [{"id": "1", "type": "FRAME", "children": [{"id": "", "type": "TEXT"}]}]
        });

        assert!(validate_against_schema(&data).is_err());
    }

    #[test]
    fn test_selection_must_be_strings() {
        let data = json!({"selection": [1, 2]});
        let errors = validate_against_schema(&data).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_custom_schema() {
        let schema = json!({
            "type": "object",
            "properties": {"color": {"type": "string", "enum": ["red", "green"]}}
        });

        assert!(validate_with_schema(&schema, &json!({"color": "red"})).is_ok());
        assert!(validate_with_schema(&schema, &json!({"color": "blue"})).is_err());
    }
}
