//! Subcommands and the option handling they share.

pub mod batch;
pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use coopex_core::models::config::CoopexConfig;

/// Pipeline options that override the configuration file.
#[derive(Args, Debug, Default)]
pub struct PipelineArgs {
    /// Filename pattern with three groups: first name, last name, id
    #[arg(long, value_name = "REGEX")]
    file_pattern: Option<String>,

    /// Executable that prints a document's text to stdout
    #[arg(short = 'x', long, value_name = "COMMAND")]
    extractor: Option<String>,

    /// Kill the extractor after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Email address pattern
    #[arg(long, value_name = "REGEX")]
    email_pattern: Option<String>,

    /// Profile link pattern
    #[arg(long, value_name = "REGEX")]
    profile_pattern: Option<String>,

    /// Code repository link pattern
    #[arg(long, value_name = "REGEX")]
    repo_pattern: Option<String>,

    /// Cover letter indicator pattern
    #[arg(long, value_name = "REGEX")]
    cover_letter_pattern: Option<String>,

    /// Work term evaluation pattern
    #[arg(long, value_name = "REGEX")]
    evaluation_pattern: Option<String>,

    /// Term average pattern; the first group holds the number
    #[arg(long, value_name = "REGEX")]
    average_pattern: Option<String>,
}

impl PipelineArgs {
    /// Apply the given options on top of `config`.
    pub fn apply(&self, config: &mut CoopexConfig) {
        fn set(target: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        set(&mut config.dispatch.file_pattern, &self.file_pattern);
        set(&mut config.extractor.command, &self.extractor);
        set(&mut config.rules.email, &self.email_pattern);
        set(&mut config.rules.profile_link, &self.profile_pattern);
        set(&mut config.rules.repo_link, &self.repo_pattern);
        set(&mut config.rules.cover_letter, &self.cover_letter_pattern);
        set(&mut config.rules.evaluation, &self.evaluation_pattern);
        set(&mut config.rules.term_average, &self.average_pattern);

        if self.timeout.is_some() {
            config.extractor.timeout_secs = self.timeout;
        }
    }
}

/// Location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("coopex")
        .join("config.json")
}

/// Load the explicit config file, else the user config file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CoopexConfig> {
    if let Some(path) = config_path {
        debug!("Loading configuration from {}", path);
        return CoopexConfig::from_file(Path::new(path)).map_err(|e| {
            anyhow::anyhow!("Failed to load config file {}: {}", path, e)
        });
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        return CoopexConfig::from_file(&path).map_err(|e| {
            anyhow::anyhow!("Failed to load config file {}: {}", path.display(), e)
        });
    }

    Ok(CoopexConfig::default())
}
