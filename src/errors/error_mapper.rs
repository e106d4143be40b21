use framecount_core::DocumentError;
use std::io::ErrorKind;
use std::path::Path;

/// Map document loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_document_load_error(error: &DocumentError, path: &Path) -> (String, String, String) {
    match error {
        DocumentError::Invalid(errors) => (
            "Validation Error".to_string(),
            "The design document has validation errors.".to_string(),
            errors.join("\n"),
        ),
        DocumentError::Json(e) => (
            "Invalid Document".to_string(),
            "The file is not a valid design document.".to_string(),
            e.to_string(),
        ),
        DocumentError::Io(e) if e.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        DocumentError::Io(e) if e.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        DocumentError::Io(e) => (
            "Error Loading File".to_string(),
            "Failed to load design document.".to_string(),
            e.to_string(),
        ),
    }
}

/// Map document saving errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_document_save_error(
    error: &dyn std::error::Error,
    path: Option<&Path>,
) -> (String, String, String) {
    let error_string = error.to_string();

    if error_string.contains("No file path set") {
        (
            "No File Path".to_string(),
            "No file path is set for this document.".to_string(),
            "Please use 'Save As' to choose a location for this file.".to_string(),
        )
    } else if error_string.contains("Permission denied") {
        let details = if let Some(p) = path {
            format!("You don't have permission to write to:\n{}", p.display())
        } else {
            "You don't have permission to write to this file.".to_string()
        };
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            details,
        )
    } else if error_string.contains("No space left") {
        (
            "Disk Full".to_string(),
            "Disk full.".to_string(),
            "There is no space left on the device to save the file.".to_string(),
        )
    } else {
        (
            "Error Saving File".to_string(),
            "Failed to save design document.".to_string(),
            error_string,
        )
    }
}

/// Map a failed summary render to user-friendly messages
/// Returns (title, message, details)
pub fn map_render_error(error: &str) -> (String, String, String) {
    if error.contains("Font") {
        (
            "Missing Font".to_string(),
            "The summary could not be drawn.".to_string(),
            format!("{}\n\nAdd the font to the document's font list and try again.", error),
        )
    } else {
        (
            "Render Failed".to_string(),
            "The summary could not be drawn.".to_string(),
            error.to_string(),
        )
    }
}
