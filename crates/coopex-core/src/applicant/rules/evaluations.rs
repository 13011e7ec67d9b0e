//! Work term evaluation extraction.

use regex::Regex;

/// Evaluation category extractor. Every occurrence counts, one per
/// evaluated term.
pub struct EvaluationExtractor<'r> {
    pattern: &'r Regex,
}

impl<'r> EvaluationExtractor<'r> {
    pub fn new(pattern: &'r Regex) -> Self {
        Self { pattern }
    }

    pub fn extract_all(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
