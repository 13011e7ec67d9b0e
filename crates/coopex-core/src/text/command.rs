//! Text extraction through an external converter such as `ps2ascii`.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, trace};

use super::{Result, TextExtractor};
use crate::error::TextExtractionError;
use crate::models::config::ExtractorConfig;

/// Runs an executable per document and reads the text from its stdout.
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl CommandExtractor {
    /// Create an extractor for `program` with no extra arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(config.command.clone())
            .with_args(config.args.clone())
            .with_timeout(config.timeout_secs.map(Duration::from_secs))
    }

    /// Arguments placed before the document path.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Kill the converter if it runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run(&self, path: &Path) -> Result<String> {
        trace!("Running {} {:?} {}", self.program, self.args, path.display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| TextExtractionError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TextExtractionError::Exit {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(
            "Extracted {} bytes of text from {}",
            output.stdout.len(),
            path.display()
        );

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl TextExtractor for CommandExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run(path))
                .await
                .map_err(|_| TextExtractionError::Timeout {
                    program: self.program.clone(),
                    seconds: limit.as_secs(),
                })?,
            None => self.run(path).await,
        }
    }
}
