//! Profile and repository link extraction.

use regex::Regex;

/// Link extractor. Only the first link in a document is reported.
pub struct LinkExtractor<'r> {
    pattern: &'r Regex,
}

impl<'r> LinkExtractor<'r> {
    pub fn new(pattern: &'r Regex) -> Self {
        Self { pattern }
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        self.pattern.find(text).map(|m| m.as_str().to_string())
    }
}
