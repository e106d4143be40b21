pub use crate::{ResultRow, StatusLevel, StatusMessage};
