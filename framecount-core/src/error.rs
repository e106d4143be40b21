use thiserror::Error;

/// Failures reported by a canvas when asked to draw
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A font the summary needs is not loaded in the document
    #[error("Font '{font}' is not available in this document")]
    FontUnavailable { font: String },
}

/// Failures loading, validating or saving a design document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
}
