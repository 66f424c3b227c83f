//! Module with Web App components.

pub mod analyze;
pub mod result;

pub use analyze::{AnalyzeForm, Overlay};
pub use result::ResultBox;
