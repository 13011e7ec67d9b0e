//! Candidate enumeration and filename decomposition.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, trace};

use crate::applicant::rules::compile;
use crate::error::{DispatchError, RuleError};
use crate::models::record::{Candidate, Identity};

/// Pattern that selects documents and splits their names into
/// first name, last name and id.
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    /// The configured pattern wrapped so it can only match a whole name.
    anchored: Regex,
}

impl FilenamePattern {
    /// Compile `pattern`, which must have exactly three capture groups.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let regex = compile("filename", pattern)?;

        // captures_len counts the implicit whole-match group.
        let found = regex.captures_len() - 1;
        if found != 3 {
            return Err(RuleError::FilenameGroups { found });
        }

        // The non-capturing wrapper keeps group numbering intact.
        let anchored = compile("filename", &format!(r"\A(?:{})\z", pattern))?;

        Ok(Self { anchored })
    }

    /// Split a file name into its key fields.
    ///
    /// Returns `None` unless the pattern matches the whole name and all three
    /// groups participate.
    pub fn parse(&self, file_name: &str) -> Option<Identity> {
        let caps = self.anchored.captures(file_name)?;

        Some(Identity {
            first_name: caps.get(1)?.as_str().to_string(),
            last_name: caps.get(2)?.as_str().to_string(),
            id: caps.get(3)?.as_str().to_string(),
        })
    }
}

/// Enumerate candidate documents in `dir`.
///
/// Only regular files whose names match `pattern` are returned, in file
/// name order. Everything else is skipped without error.
pub fn discover(dir: &Path, pattern: &FilenamePattern) -> Result<Vec<Candidate>, DispatchError> {
    let list_error = |source| DispatchError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;

        // Follows symlinks, like a plain stat would.
        let is_file = fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            trace!("Skipping non-file {}", entry.path().display());
            continue;
        }

        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            debug!("Skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };

        match pattern.parse(&file_name) {
            Some(identity) => candidates.push(Candidate {
                path: entry.path(),
                file_name,
                identity,
            }),
            None => debug!("Skipping {}: name does not match pattern", file_name),
        }
    }

    candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    debug!(
        "Found {} candidates in {}",
        candidates.len(),
        dir.display()
    );

    Ok(candidates)
}
