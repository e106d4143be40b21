pub mod dialogs;
pub mod formatting;
pub mod types;
pub mod updates;

pub use dialogs::{hide_confirmation, hide_error, set_status, show_confirmation, show_error};
pub use updates::{refresh_ui_after_state_change, update_ui_from_state};
