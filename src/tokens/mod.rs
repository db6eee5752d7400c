// Types representing branding tokens and the defects found in them

mod types;

// Re-export all public symbols
pub use types::*;

use std::{fmt, path::Path};

/// Failure to read a localization file from disk. This is a CLI concern;
/// the checking engine itself never errors on string content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}
