//! Candidate and record models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Placeholder for the overall average when no term average was found.
pub const UNKNOWN_AVERAGE: &str = "Unknown";

/// Column names of the output table, in output order.
pub const RECORD_HEADERS: [&str; 11] = [
    "ID",
    "First name",
    "Last name",
    "Email",
    "Email with name",
    "LinkedIn",
    "Github",
    "Included a cover letter",
    "Work term evaluations",
    "Term averages",
    "Overall average",
];

/// A document selected for processing, with key fields taken from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Full path handed to the text extractor.
    pub path: PathBuf,

    /// File name the key fields were parsed from.
    pub file_name: String,

    /// Applicant key fields.
    pub identity: Identity,
}

/// Applicant key fields parsed from a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    /// Sequence id exactly as it appears in the file name.
    pub id: String,
}

impl Identity {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Structured data extracted for one applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub first_name: String,
    pub last_name: String,

    /// Lowercased, deduplicated email addresses.
    pub emails: Vec<String>,

    /// `First Last <email>` for each entry of `emails`, same order.
    pub emails_with_name: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_link: Option<String>,

    pub cover_letter: bool,

    /// Evaluation categories in order of appearance, repeats included.
    pub evaluations: Vec<String>,

    /// Term averages as written in the document, in order of appearance.
    pub term_averages: Vec<String>,

    /// Mean of `term_averages`, if any were found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_average: Option<f64>,
}

impl Record {
    /// Cover letter flag as written to the output.
    pub fn cover_letter_label(&self) -> &'static str {
        if self.cover_letter { "Yes" } else { "No" }
    }

    /// Overall average with one decimal, or "Unknown".
    pub fn overall_average_label(&self) -> String {
        match self.overall_average {
            Some(average) => format!("{:.1}", average),
            None => UNKNOWN_AVERAGE.to_string(),
        }
    }

    /// Output row matching [`RECORD_HEADERS`].
    pub fn to_row(&self) -> [String; 11] {
        [
            self.id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.emails.join(","),
            self.emails_with_name.join(","),
            self.profile_link.clone().unwrap_or_default(),
            self.repo_link.clone().unwrap_or_default(),
            self.cover_letter_label().to_string(),
            self.evaluations.join(","),
            self.term_averages.join(","),
            self.overall_average_label(),
        ]
    }
}
