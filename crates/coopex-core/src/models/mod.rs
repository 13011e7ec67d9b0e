//! Data models and configuration.

pub mod config;
pub mod record;

pub use config::CoopexConfig;
pub use record::{Candidate, Identity, Record, RECORD_HEADERS, UNKNOWN_AVERAGE};
