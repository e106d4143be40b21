use slint::ComponentHandle;

use crate::ui::set_status;
use crate::{MainWindow, StatusLevel, Theme};

/// Register all UI-related handlers (theme, about)
pub fn register_ui_handlers(window: &MainWindow) {
    register_about(window);
    register_toggle_theme(window);
}

/// Register about handler
fn register_about(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_about(move || {
        let main_window = main_window_weak.unwrap();

        set_status(
            &main_window,
            concat!("Screen Counter ", env!("CARGO_PKG_VERSION")),
            StatusLevel::Info,
        );
    });
}

/// Register theme toggle handler
fn register_toggle_theme(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_toggle_theme(move || {
        let main_window = main_window_weak.unwrap();

        // Toggle between light and dark theme
        let current_theme = main_window.get_theme();
        let new_theme = if current_theme == Theme::Light {
            Theme::Dark
        } else {
            Theme::Light
        };
        main_window.set_theme(new_theme);
    });
}
