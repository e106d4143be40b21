// Public modules
pub mod canvas;
pub mod document;
pub mod error;
pub mod grouping;
pub mod io;
pub mod labeling;
pub mod models;
pub mod prefixes;
pub mod protocol;
pub mod schema_validation;
pub mod session;
pub mod summary;
pub mod validation;

// Re-export commonly used types for convenience
pub use canvas::Canvas;
pub use document::{DesignDocument, Node, Viewport, BODY_FONT, TITLE_FONT};
pub use error::{CanvasError, DocumentError};
pub use grouping::group_items;
pub use io::{load_document, load_validated_document, save_document};
pub use labeling::{display_groups, label_for};
pub use models::{ArtifactId, DisplayGroup, Group, GroupingResult, Item, ItemKind};
pub use prefixes::{is_blank, PrefixList};
pub use protocol::{parse_request, Request, Response};
pub use schema_validation::{validate_against_schema, validate_with_schema, DOCUMENT_SCHEMA};
pub use session::PluginSession;
pub use summary::{build_summary, LineStyle, SummaryLayout, SummaryLine, SUMMARY_TITLE};
pub use validation::validate_document;
