use slint::{ComponentHandle, SharedString};
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::AppState;
use crate::ui::{refresh_ui_after_state_change, set_status, update_ui_from_state};
use crate::{MainWindow, StatusLevel};

/// Register counting, reset and result list handlers
pub fn register_count_handlers(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    register_count(window, app_state);
    register_reset(window, app_state);
    register_row_clicked(window, app_state);
}

/// Register count handler (button and Enter in the prefix field)
fn register_count(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_count(move || {
        let main_window = main_window_weak.unwrap();
        let prefix_text = main_window.get_prefix_text().to_string();

        let summary = app_state
            .borrow_mut()
            .count(&prefix_text)
            .map(|result| (result.total, result.headline_count(), result.is_grouped()));

        match summary {
            Some((total, headline, grouped)) => {
                let message = if grouped {
                    format!("{} unique screens from {} frames", headline, total)
                } else {
                    format!("{} screens selected", total)
                };
                refresh_ui_after_state_change(
                    &main_window,
                    &app_state,
                    &message,
                    StatusLevel::Info,
                );
            }
            None => {
                set_status(
                    &main_window,
                    "Open a design document first",
                    StatusLevel::Warning,
                );
            }
        }
    });
}

/// Register reset handler
fn register_reset(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_reset(move || {
        let main_window = main_window_weak.unwrap();

        app_state.borrow_mut().reset();
        main_window.set_prefix_text(SharedString::new());

        update_ui_from_state(&main_window, &app_state);
        set_status(&main_window, "Results cleared", StatusLevel::Info);
    });
}

/// Register result row click handler; selects the frame on the canvas
fn register_row_clicked(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_row_clicked(move |index| {
        let main_window = main_window_weak.unwrap();

        let selected = app_state.borrow_mut().select_row(index);
        if let Some(item_id) = selected {
            let name = app_state
                .borrow()
                .item_name(&item_id)
                .unwrap_or_else(|| item_id.clone());

            let title = app_state.borrow().get_window_title();
            main_window.set_window_title(SharedString::from(title));
            set_status(&main_window, format!("Selected {}", name), StatusLevel::Info);
        }
    });
}
