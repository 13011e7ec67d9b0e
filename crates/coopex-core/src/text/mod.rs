//! Document to text conversion.

mod command;

pub use command::CommandExtractor;

use std::future::Future;
use std::path::Path;

use crate::error::TextExtractionError;

/// Result type for text extraction.
pub type Result<T> = std::result::Result<T, TextExtractionError>;

/// Converts one document into plain text.
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of the document at `path`.
    fn extract(&self, path: &Path) -> impl Future<Output = Result<String>> + Send;
}
