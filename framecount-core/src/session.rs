use crate::canvas::Canvas;
use crate::grouping::group_items;
use crate::models::GroupingResult;
use crate::protocol::{Request, Response};

/// Plugin logic bound to one canvas
///
/// Each request is handled on its own; the session keeps no state between
/// requests beyond the canvas itself and whether it was closed.
#[derive(Debug)]
pub struct PluginSession<C: Canvas> {
    canvas: C,
    closed: bool,
}

impl<C: Canvas> PluginSession<C> {
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            closed: false,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Dispatch one request, returning the reply if the action has one
    pub fn handle(&mut self, request: Request) -> Option<Response> {
        if self.closed {
            log::warn!("ignoring {:?} on a closed session", request);
            return None;
        }

        match request {
            Request::Count { prefix_input } => Some(Response::CountResult {
                result: self.count(prefix_input.as_deref()),
            }),
            Request::Select { item_id } => {
                self.select(&item_id);
                None
            }
            Request::RenderSummary { result } => Some(self.render_summary(&result)),
            Request::Close => {
                self.closed = true;
                None
            }
        }
    }

    /// Group the current selection
    pub fn count(&self, prefix_input: Option<&str>) -> GroupingResult {
        group_items(&self.canvas.list_selection(), prefix_input)
    }

    /// Select a node by id; unknown ids are ignored
    pub fn select(&mut self, item_id: &str) -> bool {
        let found = self.canvas.select_by_id(item_id);
        if !found {
            log::debug!("select: no node with id '{}'", item_id);
        }
        found
    }

    /// Draw the summary for `result`, reporting failure instead of retrying
    pub fn render_summary(&mut self, result: &GroupingResult) -> Response {
        match self.canvas.create_summary_artifact(result) {
            Ok(artifact_id) => Response::render_ok(artifact_id),
            Err(e) => {
                log::warn!("summary rendering failed: {}", e);
                Response::render_failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CanvasError;
    use crate::models::{ArtifactId, Item, ItemKind};

    /// In-memory canvas recording what the session asked of it
    #[derive(Debug, Default)]
    struct FakeCanvas {
        items: Vec<Item>,
        selected: Option<String>,
        rendered: Vec<GroupingResult>,
        fail_render: bool,
    }

    impl Canvas for FakeCanvas {
        fn list_selection(&self) -> Vec<Item> {
            self.items.clone()
        }

        fn select_by_id(&mut self, id: &str) -> bool {
            if self.items.iter().any(|i| i.id == id) {
                self.selected = Some(id.to_string());
                true
            } else {
                false
            }
        }

        fn create_summary_artifact(
            &mut self,
            result: &GroupingResult,
        ) -> Result<ArtifactId, CanvasError> {
            if self.fail_render {
                return Err(CanvasError::FontUnavailable {
                    font: "Inter Bold".to_string(),
                });
            }
            self.rendered.push(result.clone());
            Ok(ArtifactId(format!("artifact:{}", self.rendered.len())))
        }
    }

    fn session() -> PluginSession<FakeCanvas> {
        PluginSession::new(FakeCanvas {
            items: vec![
                Item::new("Dashboard A", "1", ItemKind::Frame),
                Item::new("Dashboard B", "2", ItemKind::Frame),
                Item::new("Login", "3", ItemKind::Instance),
            ],
            ..Default::default()
        })
    }

    #[test]
    fn test_count_replies_with_result() {
        let mut session = session();
        let reply = session.handle(Request::Count {
            prefix_input: Some("Dashboard".to_string()),
        });

        match reply {
            Some(Response::CountResult { result }) => {
                assert_eq!(result.grouped_count, Some(2));
                assert_eq!(result.total, 3);
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[test]
    fn test_select_has_no_reply() {
        let mut session = session();
        assert_eq!(
            session.handle(Request::Select {
                item_id: "3".to_string()
            }),
            None
        );
        assert_eq!(session.canvas().selected.as_deref(), Some("3"));

        assert_eq!(
            session.handle(Request::Select {
                item_id: "404".to_string()
            }),
            None
        );
        assert_eq!(session.canvas().selected.as_deref(), Some("3"));
    }

    #[test]
    fn test_render_summary_success_and_failure() {
        let mut session = session();
        let result = session.count(None);

        let ok = session.handle(Request::RenderSummary {
            result: result.clone(),
        });
        assert_eq!(ok, Some(Response::render_ok(ArtifactId("artifact:1".to_string()))));

        session.canvas_mut().fail_render = true;
        let failed = session.handle(Request::RenderSummary { result });
        assert_eq!(
            failed,
            Some(Response::render_failed(
                "Font 'Inter Bold' is not available in this document"
            ))
        );
        assert_eq!(session.canvas().rendered.len(), 1);
    }

    #[test]
    fn test_close_stops_handling() {
        let mut session = session();
        assert_eq!(session.handle(Request::Close), None);
        assert!(session.is_closed());
        assert_eq!(session.handle(Request::Count { prefix_input: None }), None);
    }
}
