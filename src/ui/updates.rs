use slint::{SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::AppState;
use crate::ui::dialogs::set_status;
use crate::ui::formatting::{empty_state, headline_label, list_title, prefix_info, result_rows};
use crate::ui::types::{ResultRow, StatusLevel};
use crate::MainWindow;

/// Refresh UI after a state-changing operation (count, select, render)
/// Updates window title, refreshes UI from state, and sets status message
pub fn refresh_ui_after_state_change(
    main_window: &MainWindow,
    state: &Rc<RefCell<AppState>>,
    status_message: &str,
    level: StatusLevel,
) {
    // Update window title
    let title = state.borrow().get_window_title();
    main_window.set_window_title(SharedString::from(title));

    // Refresh the UI
    update_ui_from_state(main_window, state);

    // Set status
    set_status(main_window, status_message, level);
}

/// Update the UI from the current application state
pub fn update_ui_from_state(main_window: &MainWindow, state: &Rc<RefCell<AppState>>) {
    let state_borrow = state.borrow();

    main_window.set_has_document(state_borrow.session.is_some());

    let Some(result) = state_borrow.result.clone() else {
        main_window.set_has_result(false);
        main_window.set_result_rows(Rc::new(VecModel::<ResultRow>::default()).into());

        let message = if state_borrow.session.is_some() {
            "Please select some frames"
        } else {
            "Open a design document to start counting"
        };
        main_window.set_empty_message(SharedString::from(message));
        main_window.set_empty_detail(SharedString::new());

        drop(state_borrow);
        state.borrow_mut().displayed_rows.clear();
        return;
    };
    drop(state_borrow);

    main_window.set_has_result(true);
    main_window.set_headline_count(SharedString::from(result.headline_count().to_string()));
    main_window.set_headline_label(SharedString::from(headline_label(&result)));
    main_window.set_show_total(result.is_grouped());
    main_window.set_total_count(SharedString::from(result.total.to_string()));
    main_window.set_prefix_info(SharedString::from(prefix_info(&result)));
    main_window.set_list_title(SharedString::from(list_title(&result)));

    let (message, detail) = empty_state(&result).unwrap_or_default();
    main_window.set_empty_message(SharedString::from(message));
    main_window.set_empty_detail(SharedString::from(detail));

    // Store displayed row ids for index mapping
    let (rows, ids) = result_rows(&result);
    state.borrow_mut().displayed_rows = ids;

    main_window.set_result_rows(Rc::new(VecModel::from(rows)).into());
}
