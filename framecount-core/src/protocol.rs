use serde::{Deserialize, Serialize};

use crate::models::{ArtifactId, GroupingResult};

/// Messages sent from the UI to the plugin logic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Request {
    #[serde(rename_all = "camelCase")]
    Count {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix_input: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Select { item_id: String },
    RenderSummary { result: GroupingResult },
    Close,
}

/// Messages sent back from the plugin logic to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Response {
    CountResult {
        result: GroupingResult,
    },
    #[serde(rename_all = "camelCase")]
    RenderSummaryResult {
        success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        artifact_id: Option<ArtifactId>,
    },
    /// A request line that could not be understood
    Error {
        message: String,
    },
}

impl Response {
    pub fn render_ok(artifact_id: ArtifactId) -> Self {
        Response::RenderSummaryResult {
            success: true,
            error: None,
            artifact_id: Some(artifact_id),
        }
    }

    pub fn render_failed(error: impl Into<String>) -> Self {
        Response::RenderSummaryResult {
            success: false,
            error: Some(error.into()),
            artifact_id: None,
        }
    }
}

/// Parse one JSON request
pub fn parse_request(line: &str) -> Result<Request, serde_json::Error> {
    serde_json::from_str(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_count_with_and_without_prefix() {
        let with = parse_request(r#"{"action": "count", "prefixInput": "Dash,Login"}"#).unwrap();
        assert_eq!(
            with,
            Request::Count {
                prefix_input: Some("Dash,Login".to_string())
            }
        );

        let without = parse_request(r#"{"action": "count"}"#).unwrap();
        assert_eq!(without, Request::Count { prefix_input: None });
    }

    #[test]
    fn test_parse_select_and_close() {
        assert_eq!(
            parse_request(r#"{"action": "select", "itemId": "1:2"}"#).unwrap(),
            Request::Select {
                item_id: "1:2".to_string()
            }
        );
        assert_eq!(parse_request(r#"{"action": "close"}"#).unwrap(), Request::Close);
    }

    #[test]
    fn test_parse_render_summary_accepts_count_result_payload() {
        let request = parse_request(
            r#"{"action": "render-summary", "result": {
                "total": 1, "filtered": 1, "prefixInput": "",
                "matches": [{"name": "Home", "id": "1", "type": "FRAME"}]
            }}"#,
        )
        .unwrap();

        match request {
            Request::RenderSummary { result } => {
                assert_eq!(result.total, 1);
                assert!(!result.is_grouped());
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(parse_request(r#"{"action": "explode"}"#).is_err());
    }

    #[test]
    fn test_render_failure_shape() {
        let value = serde_json::to_value(Response::render_failed("Font missing")).unwrap();
        assert_eq!(
            value,
            json!({"action": "render-summary-result", "success": false, "error": "Font missing"})
        );
    }

    #[test]
    fn test_render_success_shape() {
        let value =
            serde_json::to_value(Response::render_ok(ArtifactId("summary:1".to_string()))).unwrap();
        assert_eq!(
            value,
            json!({"action": "render-summary-result", "success": true, "artifactId": "summary:1"})
        );
    }
}
