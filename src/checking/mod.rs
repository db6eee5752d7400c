//! integrity checks comparing a source string's branding tokens against a
//! translated string

use std::collections::BTreeSet;
use tracing::debug;

use crate::scanning;
use crate::tokens::Issue;

mod diff;
mod distance;
mod fuzzy;
mod syntax;

// Re-export all public symbols
pub use diff::*;
pub use distance::*;
pub use fuzzy::*;
pub use syntax::*;

/// Fraction of a token name's length allowed as edit distance when hunting
/// for misspellings, rounded up to a whole number of edits.
pub const DEFAULT_SENSITIVITY: f64 = 0.2;

/// Everything one invocation of the checker found: the ordered list of
/// issues, plus the token sets computed along the way so the caller does
/// not have to extract them again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub issues: Vec<Issue>,
    pub source_tokens: BTreeSet<String>,
    pub target_tokens: BTreeSet<String>,
}

/// Runs all four token integrity checks over a (source, target) pair of
/// strings. Stateless; every invocation is independent, so a host may run
/// one checker across many resource pairs concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Checker {
    sensitivity: f64,
}

impl Checker {
    pub fn new(sensitivity: f64) -> Checker {
        Checker { sensitivity }
    }

    /// Scan both strings for tokens and report corrupt markup, likely
    /// misspellings, and tokens added to or removed from the translation.
    /// Issues are ordered syntax first, then misspellings, then additions,
    /// then removals. A name already explained as a misspelling is not
    /// also reported as added or removed; the misspelling is the more
    /// informative diagnosis of the same defect.
    pub fn check(&self, source: &str, target: &str) -> Report {
        let source_tokens = scanning::extract_token_names(source);
        let target_tokens = scanning::extract_token_names(target);
        debug!(
            "found {} source and {} target tokens",
            source_tokens.len(),
            target_tokens.len()
        );

        let mut issues = report_syntax_errors_for_tokens(&source_tokens, target);

        let misspellings = extract_misspelled_tokens(&source_tokens, target, self.sensitivity);
        for (name, candidates) in &misspellings {
            for candidate in candidates {
                issues.push(Issue::Misspelled(name.clone(), candidate.clone()));
            }
        }

        let (added, removed) = find_added_and_removed(&source_tokens, &target_tokens, &misspellings);
        issues.extend(added);
        issues.extend(removed);

        debug!("reporting {} issues", issues.len());

        Report {
            issues,
            source_tokens,
            target_tokens,
        }
    }
}

impl Default for Checker {
    fn default() -> Checker {
        Checker::new(DEFAULT_SENSITIVITY)
    }
}
