//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::applicant::rules::patterns;
use crate::error::CoopexError;

/// Main configuration for the coopex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoopexConfig {
    /// Candidate selection.
    pub dispatch: DispatchConfig,

    /// External text extractor.
    pub extractor: ExtractorConfig,

    /// Worker pool sizing.
    pub pool: PoolConfig,

    /// Content extraction patterns.
    pub rules: RuleConfig,
}

/// Candidate selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Filename pattern with exactly three groups: first name, last name, id.
    pub file_pattern: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            file_pattern: patterns::DEFAULT_FILE_PATTERN.to_string(),
        }
    }
}

/// External text extractor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Executable that prints a document's text to stdout.
    pub command: String,

    /// Arguments passed before the document path.
    pub args: Vec<String>,

    /// Per-document timeout in seconds (none = wait indefinitely).
    pub timeout_secs: Option<u64>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            command: "ps2ascii".to_string(),
            args: Vec::new(),
            timeout_secs: None,
        }
    }
}

/// Worker pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of concurrent workers. Each one mostly waits on a subprocess,
    /// so this is not tied to the CPU count.
    pub workers: usize,

    /// Capacity of the pending-work queue.
    pub queue_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            queue_capacity: 16,
        }
    }
}

/// Content extraction patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Email addresses.
    pub email: String,

    /// Professional profile link (first match is kept).
    pub profile_link: String,

    /// Code repository link (first match is kept).
    pub repo_link: String,

    /// Presence of this pattern marks a cover letter.
    pub cover_letter: String,

    /// Work term evaluation categories.
    pub evaluation: String,

    /// Term average; the first capture group holds the number.
    pub term_average: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            email: patterns::DEFAULT_EMAIL.to_string(),
            profile_link: patterns::DEFAULT_PROFILE_LINK.to_string(),
            repo_link: patterns::DEFAULT_REPO_LINK.to_string(),
            cover_letter: patterns::DEFAULT_COVER_LETTER.to_string(),
            evaluation: patterns::DEFAULT_EVALUATION.to_string(),
            term_average: patterns::DEFAULT_TERM_AVERAGE.to_string(),
        }
    }
}

impl CoopexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Check values that cannot be expressed in the type system.
    ///
    /// Patterns are validated separately when they are compiled.
    pub fn validate(&self) -> Result<(), CoopexError> {
        if self.pool.workers == 0 {
            return Err(CoopexError::Config(
                "pool.workers must be at least 1".to_string(),
            ));
        }
        if self.pool.queue_capacity == 0 {
            return Err(CoopexError::Config(
                "pool.queue_capacity must be at least 1".to_string(),
            ));
        }
        if self.extractor.command.trim().is_empty() {
            return Err(CoopexError::Config(
                "extractor.command must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
