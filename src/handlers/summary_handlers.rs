use framecount_core::Response;
use slint::{ComponentHandle, SharedString};
use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::map_render_error;
use crate::state::AppState;
use crate::ui::{set_status, show_error};
use crate::{MainWindow, StatusLevel};

/// Register summary rendering handlers
pub fn register_summary_handlers(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    register_render_summary(window, app_state);
}

/// Register render summary handler
fn register_render_summary(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_render_summary(move || {
        let main_window = main_window_weak.unwrap();

        let reply = app_state.borrow_mut().render_summary();

        match reply {
            Some(Response::RenderSummaryResult {
                success: true,
                artifact_id,
                ..
            }) => {
                let title = app_state.borrow().get_window_title();
                main_window.set_window_title(SharedString::from(title));

                let id = artifact_id.map(|a| a.to_string()).unwrap_or_default();
                set_status(
                    &main_window,
                    format!("Summary rendered as {}", id),
                    StatusLevel::Success,
                );
            }
            Some(Response::RenderSummaryResult { error, .. }) => {
                let error = error.unwrap_or_else(|| "Unknown error".to_string());
                let (title, message, details) = map_render_error(&error);
                show_error(&main_window, title, message, details);
                set_status(&main_window, "Summary rendering failed", StatusLevel::Error);
            }
            _ => {
                set_status(&main_window, "Count some screens first", StatusLevel::Warning);
            }
        }
    });
}
