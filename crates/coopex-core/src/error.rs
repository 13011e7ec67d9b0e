//! Error types for the coopex-core library.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for the coopex library.
#[derive(Error, Debug)]
pub enum CoopexError {
    /// Candidate enumeration failed.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The external text extractor failed for a document.
    #[error("text extraction failed for {path}: {source}", path = path.display())]
    TextExtraction {
        path: PathBuf,
        #[source]
        source: TextExtractionError,
    },

    /// A configured pattern is unusable.
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    /// Writing the result set failed.
    #[error("output error: {0}")]
    Output(#[from] OutputError),

    /// A worker task panicked or was cancelled.
    #[error("worker task failed: {0}")]
    Worker(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while enumerating candidate documents.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The scan directory could not be listed.
    #[error("failed to list directory {path}: {source}", path = path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the external text extractor.
#[derive(Error, Debug)]
pub enum TextExtractionError {
    /// The extractor executable could not be started.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The extractor ran but exited unsuccessfully.
    #[error("'{program}' exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The extractor did not finish within the configured timeout.
    #[error("'{program}' timed out after {seconds}s")]
    Timeout { program: String, seconds: u64 },
}

/// Errors building the extraction rule set or filename pattern.
#[derive(Error, Debug)]
pub enum RuleError {
    /// A pattern failed to compile.
    #[error("invalid {name} pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The filename pattern does not capture first name, last name and id.
    #[error("filename pattern must have exactly 3 capture groups, found {found}")]
    FilenameGroups { found: usize },
}

/// Errors serializing the result set.
#[derive(Error, Debug)]
pub enum OutputError {
    /// CSV serialization failed.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the underlying writer failed.
    #[error("failed to flush output: {0}")]
    Flush(#[from] std::io::Error),
}

/// Result type for the coopex library.
pub type Result<T> = std::result::Result<T, CoopexError>;
