use clap::Parser;
use slint::SharedString;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

slint::include_modules!();

mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use handlers::*;
use operations::FileOperations;
use state::{AppState, UiState};
use ui::{set_status, update_ui_from_state};

/// Screen Counter - count and group selected frames of a design document
#[derive(Parser, Debug)]
#[command(name = "framecount")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Design document to open on start
    #[arg(value_name = "FILE")]
    document: Option<PathBuf>,

    /// Prefixes to pre-fill the prefix field with
    #[arg(short, long = "prefixes", value_name = "LIST", env = "FRAMECOUNT_PREFIXES")]
    prefixes: Option<String>,
}

pub fn main() -> Result<(), slint::PlatformError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let main_window = MainWindow::new()?;
    let app_state = Rc::new(RefCell::new(AppState::new()));
    let ui_state = Rc::new(RefCell::new(UiState::new()));

    main_window.set_window_title(SharedString::from(app_state.borrow().get_window_title()));
    if let Some(ref prefixes) = args.prefixes {
        main_window.set_prefix_text(SharedString::from(prefixes.as_str()));
    }

    register_file_handlers(&main_window, &app_state, &ui_state);
    register_count_handlers(&main_window, &app_state);
    register_summary_handlers(&main_window, &app_state);
    register_dialog_handlers(&main_window, &app_state, &ui_state);
    register_ui_handlers(&main_window);

    update_ui_from_state(&main_window, &app_state);

    match args.document {
        Some(ref path) => FileOperations::new(&app_state, &main_window).load_file(path),
        None => set_status(&main_window, "Open a design document", StatusLevel::Info),
    }

    main_window.run()
}
