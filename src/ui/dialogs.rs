use slint::SharedString;

use super::types::{StatusLevel, StatusMessage};
use crate::MainWindow;

/// Status bar message
pub fn set_status(window: &MainWindow, text: impl Into<SharedString>, level: StatusLevel) {
    window.set_status(StatusMessage {
        text: text.into(),
        level,
    });
}

/// Unsaved-changes prompt
pub fn show_confirmation(window: &MainWindow, message: impl Into<SharedString>) {
    window.set_confirmation_message(message.into());
    window.set_show_confirmation_dialog(true);
}

pub fn hide_confirmation(window: &MainWindow) {
    window.set_show_confirmation_dialog(false);
}

/// Error dialog with a details pane
pub fn show_error(
    window: &MainWindow,
    title: impl Into<SharedString>,
    message: impl Into<SharedString>,
    details: impl Into<SharedString>,
) {
    window.set_error_title(title.into());
    window.set_error_message(message.into());
    window.set_error_details(details.into());
    window.set_show_error_dialog(true);
}

pub fn hide_error(window: &MainWindow) {
    window.set_show_error_dialog(false);
}
