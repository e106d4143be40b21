pub mod error_mapper;

pub use error_mapper::{map_document_load_error, map_document_save_error, map_render_error};
