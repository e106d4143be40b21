pub mod count_handlers;
pub mod dialog_handlers;
pub mod file_handlers;
pub mod summary_handlers;
pub mod ui_handlers;

pub use count_handlers::register_count_handlers;
pub use dialog_handlers::register_dialog_handlers;
pub use file_handlers::register_file_handlers;
pub use summary_handlers::register_summary_handlers;
pub use ui_handlers::register_ui_handlers;
