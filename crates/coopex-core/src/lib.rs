//! Core library for co-op application package extraction.
//!
//! This crate provides:
//! - Candidate discovery from file names (first name, last name, id)
//! - Document to text conversion through an external converter
//! - Rule-based applicant field extraction (emails, links, cover letter,
//!   work term evaluations, term averages)
//! - A worker pool that runs the above concurrently
//! - Deterministic ordering and CSV serialization of the results

pub mod applicant;
pub mod collector;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod pool;
pub mod text;

pub use applicant::{ApplicantParser, ExtractionResult, ExtractionRuleSet};
pub use collector::{finalize, sort_records, write_csv};
pub use dispatch::{discover, FilenamePattern};
pub use error::{CoopexError, Result};
pub use models::{Candidate, CoopexConfig, Identity, Record, RECORD_HEADERS};
pub use pool::{ProgressHook, WorkerPool};
pub use text::{CommandExtractor, TextExtractor};
