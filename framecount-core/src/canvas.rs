use crate::error::CanvasError;
use crate::models::{ArtifactId, GroupingResult, Item};

/// Host canvas capabilities the plugin depends on
///
/// The grouping core only ever sees `Item` snapshots; everything that touches
/// live canvas state goes through this trait.
pub trait Canvas {
    /// Countable items in the current selection, in selection order
    fn list_selection(&self) -> Vec<Item>;

    /// Make the node with `id` the active selection
    /// Returns false when no such node exists.
    fn select_by_id(&mut self, id: &str) -> bool;

    /// Draw a visual summary of `result` onto the canvas
    fn create_summary_artifact(&mut self, result: &GroupingResult)
        -> Result<ArtifactId, CanvasError>;
}
