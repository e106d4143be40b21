use slint::{ComponentHandle, SharedString};
use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::map_document_save_error;
use crate::handlers::file_handlers::{close_plugin, spawn_open_dialog};
use crate::state::{AppState, PendingAction, UiState};
use crate::ui::{hide_confirmation, hide_error, set_status, show_error};
use crate::{MainWindow, StatusLevel};

/// Register all dialog response handlers
pub fn register_dialog_handlers(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    register_confirmation_save(window, app_state, ui_state);
    register_confirmation_dont_save(window, app_state, ui_state);
    register_confirmation_cancel(window, ui_state);
    register_error_dialog_close(window);
}

/// Register confirmation dialog "Save" handler
fn register_confirmation_save(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_confirmation_save(move || {
        let main_window = main_window_weak.unwrap();

        // Save the file first
        let save_result = app_state.borrow_mut().save();

        match save_result {
            Ok(_) => {
                let title = app_state.borrow().get_window_title();
                main_window.set_window_title(SharedString::from(title));

                hide_confirmation(&main_window);

                // Now proceed with the pending action
                let action = ui_state.borrow_mut().take_pending();
                if let Some(action) = action {
                    execute_pending_action(action, &app_state, &main_window);
                }
            }
            Err(e) => {
                hide_confirmation(&main_window);

                let path = app_state.borrow().current_file.clone();
                let (title, message, details) = map_document_save_error(&*e, path.as_deref());
                show_error(&main_window, title, message, details);

                // Clear pending action since we couldn't save
                ui_state.borrow_mut().pending_action = None;
            }
        }
    });
}

/// Register confirmation dialog "Don't Save" handler
fn register_confirmation_dont_save(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_confirmation_dont_save(move || {
        let main_window = main_window_weak.unwrap();

        hide_confirmation(&main_window);

        // Proceed with the pending action without saving
        let action = ui_state.borrow_mut().take_pending();
        if let Some(action) = action {
            execute_pending_action(action, &app_state, &main_window);
        }
    });
}

/// Register confirmation dialog "Cancel" handler
fn register_confirmation_cancel(window: &MainWindow, ui_state: &Rc<RefCell<UiState>>) {
    let main_window_weak = window.as_weak();
    let ui_state = ui_state.clone();

    window.on_confirmation_cancel(move || {
        let main_window = main_window_weak.unwrap();

        hide_confirmation(&main_window);
        ui_state.borrow_mut().pending_action = None;

        set_status(&main_window, "Action cancelled", StatusLevel::Info);
    });
}

/// Register error dialog close handler
fn register_error_dialog_close(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_error_dialog_close(move || {
        let main_window = main_window_weak.unwrap();
        hide_error(&main_window);
    });
}

/// Helper function to execute a pending action
fn execute_pending_action(
    action: PendingAction,
    app_state: &Rc<RefCell<AppState>>,
    main_window: &MainWindow,
) {
    match action {
        PendingAction::Open => spawn_open_dialog(app_state, main_window),
        PendingAction::Close => close_plugin(app_state, main_window),
    }
}
