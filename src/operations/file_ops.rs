use slint::SharedString;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::errors::{map_document_load_error, map_document_save_error};
use crate::state::AppState;
use crate::ui::{set_status, show_error, update_ui_from_state};
use crate::{MainWindow, StatusLevel};

/// File operations orchestration
/// Handles all file I/O with proper error handling and UI updates
pub struct FileOperations<'a> {
    state: &'a Rc<RefCell<AppState>>,
    window: &'a MainWindow,
}

impl<'a> FileOperations<'a> {
    pub fn new(state: &'a Rc<RefCell<AppState>>, window: &'a MainWindow) -> Self {
        Self { state, window }
    }

    /// Open file dialog and load the selected design document
    pub async fn open_file_dialog_and_load(&self) {
        if let Some(file) = rfd::AsyncFileDialog::new()
            .add_filter("JSON", &["json"])
            .set_title("Open Design Document")
            .pick_file()
            .await
        {
            self.load_file(file.path());
        }
    }

    /// Load a design document from the given path
    pub fn load_file(&self, path: &Path) {
        // Load the file (borrow mutably, then drop the borrow)
        let load_result = self.state.borrow_mut().load_from_file(path.to_path_buf());

        match load_result {
            Ok(_) => {
                let title = self.state.borrow().get_window_title();
                self.window.set_window_title(SharedString::from(title));

                update_ui_from_state(self.window, self.state);

                let selected = self
                    .state
                    .borrow()
                    .session
                    .as_ref()
                    .map_or(0, |s| s.canvas().selection.len());
                set_status(
                    self.window,
                    format!("Document loaded ({} nodes selected)", selected),
                    StatusLevel::Success,
                );
            }
            Err(e) => {
                log::error!("failed to load {}: {}", path.display(), e);
                let (title, message, details) = map_document_load_error(&e, path);
                show_error(self.window, title, message, details);
            }
        }
    }

    /// Save the current document to its current file
    pub fn save(&self) -> Result<(), String> {
        let save_result = self.state.borrow_mut().save();

        match save_result {
            Ok(_) => {
                let title = self.state.borrow().get_window_title();
                self.window.set_window_title(SharedString::from(title));

                set_status(self.window, "Document saved", StatusLevel::Success);
                Ok(())
            }
            Err(e) => {
                let path = self.state.borrow().current_file.clone();
                let (title, message, details) = map_document_save_error(&*e, path.as_deref());
                show_error(self.window, title, message, details);
                Err(e.to_string())
            }
        }
    }

    /// Save the current document to a new file (async for file dialog)
    pub async fn save_as(&self) {
        if let Some(file) = rfd::AsyncFileDialog::new()
            .add_filter("JSON", &["json"])
            .set_title("Save Design Document As")
            .save_file()
            .await
        {
            let path = file.path().to_path_buf();
            let save_result = self.state.borrow_mut().save_as(path.clone());

            match save_result {
                Ok(_) => {
                    let title = self.state.borrow().get_window_title();
                    self.window.set_window_title(SharedString::from(title));

                    set_status(self.window, "Document saved", StatusLevel::Success);
                }
                Err(e) => {
                    let (title, message, details) = map_document_save_error(&*e, Some(&path));
                    show_error(self.window, title, message, details);
                }
            }
        }
    }
}
