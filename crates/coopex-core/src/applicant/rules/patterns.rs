//! Default patterns for co-op application packages.

use lazy_static::lazy_static;

use super::ExtractionRuleSet;
use crate::models::config::RuleConfig;

/// `<First> <Last> (<id>).pdf`, as exported by the co-op portal.
pub const DEFAULT_FILE_PATTERN: &str = r"^([A-Za-z -]+) ([A-Za-z-]+) \(([0-9]+)\)\.pdf$";

pub const DEFAULT_EMAIL: &str = r"[A-Za-z0-9_.-]+@[A-Za-z0-9.-]+\.[A-Za-z0-9]+";

pub const DEFAULT_PROFILE_LINK: &str = r"linkedin\.com/in/[A-Za-z0-9_.-]+";

pub const DEFAULT_REPO_LINK: &str = r"github\.com/[A-Za-z0-9_.-]+";

/// Closings and salutations that only show up in a cover letter.
pub const DEFAULT_COVER_LETTER: &str = r"[Ss]incerely|[Hh]iring [Mm]anager";

// UNSATISFACTORY must come before SATISFACTORY so the longer word wins.
pub const DEFAULT_EVALUATION: &str =
    r"UNSATISFACTORY|MARGINAL|SATISFACTORY|VERY GOOD|EXCELLENT|OUTSTANDING";

pub const DEFAULT_TERM_AVERAGE: &str = r"Term Average:\s*([0-9]{2}\.*[0-9]*)";

lazy_static! {
    /// Rule set compiled from the default patterns.
    pub static ref DEFAULT_RULES: ExtractionRuleSet =
        ExtractionRuleSet::from_config(&RuleConfig::default()).unwrap();
}
