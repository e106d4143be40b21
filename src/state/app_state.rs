use framecount_core::*;
use std::path::PathBuf;

/// Application state management - Domain state only
/// This struct contains only domain/business logic state
#[derive(Debug)]
pub struct AppState {
    /// Plugin session bound to the open design document
    pub session: Option<PluginSession<DesignDocument>>,
    /// Path to current document file
    pub current_file: Option<PathBuf>,
    /// Last count result shown in the UI
    pub result: Option<GroupingResult>,
    /// Item ids in the order rows are displayed; headers map to None
    pub displayed_rows: Vec<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: None,
            current_file: None,
            result: None,
            displayed_rows: Vec::new(),
        }
    }

    /// Load and validate a design document
    pub fn load_from_file(&mut self, path: PathBuf) -> Result<(), DocumentError> {
        let document = load_validated_document(&path)?;

        log::info!(
            "loaded {} with {} top-level nodes",
            path.display(),
            document.nodes.len()
        );

        self.session = Some(PluginSession::new(document));
        self.current_file = Some(path);
        self.result = None;
        self.displayed_rows.clear();

        Ok(())
    }

    /// Save the document to its current file
    pub fn save(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let path = self.current_file.clone().ok_or("No file path set")?;
        self.save_as(path)
    }

    /// Save the document to a new file
    pub fn save_as(&mut self, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let session = self.session.as_mut().ok_or("No document to save")?;
        save_document(session.canvas_mut(), &path)?;
        self.current_file = Some(path);
        Ok(())
    }

    /// Whether the document has unsaved selection or artifact changes
    pub fn is_dirty(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.canvas().is_modified())
    }

    /// Run a count request against the open document
    pub fn count(&mut self, prefix_input: &str) -> Option<&GroupingResult> {
        let session = self.session.as_mut()?;
        let reply = session.handle(Request::Count {
            prefix_input: Some(prefix_input.trim().to_string()),
        });

        if let Some(Response::CountResult { result }) = reply {
            self.result = Some(result);
        }
        self.result.as_ref()
    }

    /// Select the item behind a displayed row
    pub fn select_row(&mut self, index: i32) -> Option<String> {
        if index < 0 {
            return None;
        }

        let item_id = self.displayed_rows.get(index as usize)?.clone()?;
        let session = self.session.as_mut()?;
        session.handle(Request::Select {
            item_id: item_id.clone(),
        });
        Some(item_id)
    }

    /// Render the current result into the document
    pub fn render_summary(&mut self) -> Option<Response> {
        let result = self.result.clone()?;
        let session = self.session.as_mut()?;
        session.handle(Request::RenderSummary { result })
    }

    /// Forget the current result
    pub fn reset(&mut self) {
        self.result = None;
        self.displayed_rows.clear();
    }

    /// Name of a selected item, for status messages
    pub fn item_name(&self, item_id: &str) -> Option<String> {
        let session = self.session.as_ref()?;
        session.canvas().find_node(item_id).map(|n| n.name.clone())
    }

    /// Get window title with file name and dirty indicator
    pub fn get_window_title(&self) -> String {
        let file_name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("No document");

        let dirty_marker = if self.is_dirty() { "*" } else { "" };

        format!("Screen Counter - {}{}", file_name, dirty_marker)
    }
}
