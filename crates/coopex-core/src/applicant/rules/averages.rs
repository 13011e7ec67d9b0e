//! Term average extraction.

use regex::Regex;
use tracing::warn;

/// Term averages found in one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermAverages {
    /// Values that parsed, as written in the text.
    pub values: Vec<String>,
    /// Mean of `values`, if there are any.
    pub overall: Option<f64>,
    /// The token that stopped accumulation, if one failed to parse.
    pub rejected: Option<String>,
}

/// Term average extractor.
///
/// The number is taken from the first capture group, or from the whole
/// match when the pattern has no groups. Accumulation stops at the first
/// value that is not a number; values before it are kept.
pub struct AverageExtractor<'r> {
    pattern: &'r Regex,
}

impl<'r> AverageExtractor<'r> {
    pub fn new(pattern: &'r Regex) -> Self {
        Self { pattern }
    }

    /// Extract averages for the applicant identified by `id`.
    pub fn extract(&self, id: &str, text: &str) -> TermAverages {
        let mut result = TermAverages::default();
        let mut sum = 0.0;

        for caps in self.pattern.captures_iter(text) {
            let Some(token) = caps.get(1).or_else(|| caps.get(0)) else {
                continue;
            };
            let token = token.as_str();

            match token.parse::<f64>() {
                Ok(value) => {
                    sum += value;
                    result.values.push(token.to_string());
                }
                Err(_) => {
                    warn!(id, value = token, "Error parsing term average");
                    result.rejected = Some(token.to_string());
                    break;
                }
            }
        }

        if !result.values.is_empty() {
            result.overall = Some(sum / result.values.len() as f64);
        }

        result
    }
}
