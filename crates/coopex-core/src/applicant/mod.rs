//! Applicant field extraction module.

mod parser;
pub mod rules;

pub use parser::{ApplicantParser, ExtractionResult};
pub use rules::ExtractionRuleSet;
