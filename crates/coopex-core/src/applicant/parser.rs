//! Applicant record parser combining the field rules.

use std::sync::Arc;

use tracing::debug;

use crate::models::record::{Identity, Record};

use super::rules::{with_display_name, ExtractionRuleSet};

/// Result of extracting one applicant record.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: Record,
    /// Recoverable problems encountered while extracting.
    pub warnings: Vec<String>,
}

/// Builds a [`Record`] from extracted document text.
///
/// Parsing is pure: the same identity and text always give the same record.
#[derive(Debug, Clone)]
pub struct ApplicantParser {
    rules: Arc<ExtractionRuleSet>,
}

impl ApplicantParser {
    pub fn new(rules: Arc<ExtractionRuleSet>) -> Self {
        Self { rules }
    }

    /// Parse the text of the document belonging to `identity`.
    pub fn parse(&self, identity: &Identity, text: &str) -> ExtractionResult {
        let mut warnings = Vec::new();

        let emails = self.rules.emails().extract_all(text);
        let emails_with_name = with_display_name(identity, &emails);

        let averages = self.rules.term_averages().extract(&identity.id, text);
        if let Some(token) = &averages.rejected {
            warnings.push(format!(
                "Error parsing average '{}' for id '{}'",
                token, identity.id
            ));
        }

        let record = Record {
            id: identity.id.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            emails,
            emails_with_name,
            profile_link: self.rules.profile_link().extract(text),
            repo_link: self.rules.repo_link().extract(text),
            cover_letter: self.rules.has_cover_letter(text),
            evaluations: self.rules.evaluations().extract_all(text),
            term_averages: averages.values,
            overall_average: averages.overall,
        };

        debug!(
            "Extracted record {} ({} emails, {} evaluations, {} averages)",
            record.id,
            record.emails.len(),
            record.evaluations.len(),
            record.term_averages.len()
        );

        ExtractionResult { record, warnings }
    }
}

impl Default for ApplicantParser {
    fn default() -> Self {
        Self::new(Arc::new(ExtractionRuleSet::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jane() -> Identity {
        Identity {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            id: "12".to_string(),
        }
    }

    #[test]
    fn test_parse_full_package() {
        let text = r#"
            Dear Hiring Manager,
            I am applying for the Rust developer position.
            Sincerely, Jane

            JANE DOE
            Jane.Doe@Example.com | jdoe@uwaterloo.ca | JANE.DOE@example.com
            linkedin.com/in/janedoe | github.com/janedoe

            Work Term 1 Evaluation: EXCELLENT
            Work Term 2 Evaluation: OUTSTANDING

            1A Term Average: 82.5
            1B Term Average: 87.5
        "#;

        let result = ApplicantParser::default().parse(&jane(), text);
        let record = result.record;

        assert!(result.warnings.is_empty());
        assert_eq!(record.id, "12");
        assert_eq!(record.emails.len(), 2);
        assert!(record.emails.contains(&"jane.doe@example.com".to_string()));
        assert!(record.emails.contains(&"jdoe@uwaterloo.ca".to_string()));
        assert!(record
            .emails_with_name
            .contains(&"Jane Doe <jdoe@uwaterloo.ca>".to_string()));
        assert_eq!(record.profile_link.as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(record.repo_link.as_deref(), Some("github.com/janedoe"));
        assert!(record.cover_letter);
        assert_eq!(record.evaluations, vec!["EXCELLENT", "OUTSTANDING"]);
        assert_eq!(record.term_averages, vec!["82.5", "87.5"]);
        assert_eq!(record.overall_average_label(), "85.0");
    }

    #[test]
    fn test_display_names_follow_email_order() {
        let text = "b@x.com a@x.com";
        let record = ApplicantParser::default().parse(&jane(), text).record;

        let expected: Vec<String> = record
            .emails
            .iter()
            .map(|e| format!("Jane Doe <{}>", e))
            .collect();
        assert_eq!(record.emails_with_name, expected);
    }

    #[test]
    fn test_empty_text_still_yields_record() {
        let record = ApplicantParser::default().parse(&jane(), "").record;

        let row = record.to_row();
        assert_eq!(&row[..3], ["12", "Jane", "Doe"]);
        assert_eq!(row[3], "");
        assert_eq!(row[5], "");
        assert_eq!(row[6], "");
        assert_eq!(row[7], "No");
        assert_eq!(row[8], "");
        assert_eq!(row[9], "");
        assert_eq!(row[10], "Unknown");
    }

    #[test]
    fn test_bad_average_is_a_warning() {
        let text = "Term Average: 80\nTerm Average: 9x..\nTerm Average: 85..5";
        let result = ApplicantParser::default().parse(&jane(), text);

        assert_eq!(result.record.term_averages, vec!["80"]);
        assert_eq!(result.record.overall_average, Some(80.0));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("85..5"));
        assert!(result.warnings[0].contains("'12'"));
    }
}
