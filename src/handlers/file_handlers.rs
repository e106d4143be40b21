use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

use crate::operations::FileOperations;
use crate::state::{AppState, PendingAction, UiState};
use crate::ui::show_confirmation;
use crate::MainWindow;

/// Register all file operation handlers
pub fn register_file_handlers(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    register_file_open(window, app_state, ui_state);
    register_file_save(window, app_state);
    register_file_save_as(window, app_state);
    register_file_close(window, app_state, ui_state);
}

/// Register Open handler
fn register_file_open(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_file_open(move || {
        let main_window = main_window_weak.unwrap();

        // Check for unsaved changes
        if app_state.borrow().is_dirty() {
            ui_state.borrow_mut().set_pending(PendingAction::Open);
            show_confirmation(
                &main_window,
                "The document has unsaved changes. Do you want to save before opening another file?",
            );
        } else {
            spawn_open_dialog(&app_state, &main_window);
        }
    });
}

/// Register Save handler
fn register_file_save(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_file_save(move || {
        let main_window = main_window_weak.unwrap();

        let ops = FileOperations::new(&app_state, &main_window);
        let _ = ops.save();
    });
}

/// Register Save As handler
fn register_file_save_as(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_file_save_as(move || {
        let main_window = main_window_weak.unwrap();
        let app_state = app_state.clone();
        let main_window_clone = main_window.clone_strong();

        if let Err(e) = slint::spawn_local(async move {
            let ops = FileOperations::new(&app_state, &main_window_clone);
            ops.save_as().await;
        }) {
            log::error!("could not start save dialog: {}", e);
        }
    });
}

/// Register Close handler; ends the plugin session
fn register_file_close(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_file_close(move || {
        let main_window = main_window_weak.unwrap();

        if app_state.borrow().is_dirty() {
            ui_state.borrow_mut().set_pending(PendingAction::Close);
            show_confirmation(
                &main_window,
                "The document has unsaved changes. Do you want to save before closing?",
            );
        } else {
            close_plugin(&app_state, &main_window);
        }
    });
}

/// Start the async open dialog on the event loop
pub fn spawn_open_dialog(app_state: &Rc<RefCell<AppState>>, main_window: &MainWindow) {
    let app_state = app_state.clone();
    let main_window = main_window.clone_strong();

    if let Err(e) = slint::spawn_local(async move {
        let ops = FileOperations::new(&app_state, &main_window);
        ops.open_file_dialog_and_load().await;
    }) {
        log::error!("could not start open dialog: {}", e);
    }
}

/// Send close to the session and quit the event loop
pub fn close_plugin(app_state: &Rc<RefCell<AppState>>, main_window: &MainWindow) {
    if let Some(session) = app_state.borrow_mut().session.as_mut() {
        session.handle(framecount_core::Request::Close);
    }
    let _ = main_window.hide();
    let _ = slint::quit_event_loop();
}
