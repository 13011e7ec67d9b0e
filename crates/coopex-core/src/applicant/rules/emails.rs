//! Email address extraction.

use std::collections::BTreeSet;

use regex::Regex;

use crate::models::record::Identity;

/// Email extractor. Addresses are compared case-insensitively and reported
/// in lowercase.
pub struct EmailExtractor<'r> {
    pattern: &'r Regex,
}

impl<'r> EmailExtractor<'r> {
    pub fn new(pattern: &'r Regex) -> Self {
        Self { pattern }
    }

    /// Unique addresses. The order is not meaningful.
    pub fn extract_all(&self, text: &str) -> Vec<String> {
        let unique: BTreeSet<String> = self
            .pattern
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        unique.into_iter().collect()
    }
}

/// Format each address as `First Last <address>`, keeping the input order.
pub fn with_display_name(identity: &Identity, emails: &[String]) -> Vec<String> {
    let name = identity.full_name();
    emails
        .iter()
        .map(|email| format!("{} <{}>", name, email))
        .collect()
}
