//! Rule-based field extractors for application packages.

pub mod averages;
pub mod emails;
pub mod links;
pub mod evaluations;
pub mod patterns;

pub use averages::{AverageExtractor, TermAverages};
pub use emails::{with_display_name, EmailExtractor};
pub use evaluations::EvaluationExtractor;
pub use links::LinkExtractor;
pub use patterns::DEFAULT_RULES;

use regex::Regex;

use crate::error::RuleError;
use crate::models::config::RuleConfig;

/// Compiled content patterns, shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct ExtractionRuleSet {
    email: Regex,
    profile_link: Regex,
    repo_link: Regex,
    cover_letter: Regex,
    evaluation: Regex,
    term_average: Regex,
}

impl ExtractionRuleSet {
    /// Compile every pattern in `config`.
    pub fn from_config(config: &RuleConfig) -> Result<Self, RuleError> {
        Ok(Self {
            email: compile("email", &config.email)?,
            profile_link: compile("profile link", &config.profile_link)?,
            repo_link: compile("repo link", &config.repo_link)?,
            cover_letter: compile("cover letter", &config.cover_letter)?,
            evaluation: compile("evaluation", &config.evaluation)?,
            term_average: compile("term average", &config.term_average)?,
        })
    }

    pub fn emails(&self) -> EmailExtractor<'_> {
        EmailExtractor::new(&self.email)
    }

    pub fn profile_link(&self) -> LinkExtractor<'_> {
        LinkExtractor::new(&self.profile_link)
    }

    pub fn repo_link(&self) -> LinkExtractor<'_> {
        LinkExtractor::new(&self.repo_link)
    }

    pub fn evaluations(&self) -> EvaluationExtractor<'_> {
        EvaluationExtractor::new(&self.evaluation)
    }

    pub fn term_averages(&self) -> AverageExtractor<'_> {
        AverageExtractor::new(&self.term_average)
    }

    /// Whether the text contains any cover letter indicator.
    pub fn has_cover_letter(&self, text: &str) -> bool {
        self.cover_letter.is_match(text)
    }
}

impl Default for ExtractionRuleSet {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

pub(crate) fn compile(name: &'static str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern { name, source })
}
