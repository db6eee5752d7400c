//! extraction of branding tokens from localization text

use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use crate::tokens::LoadingError;

mod locator;

pub(crate) use locator::locate_occurrences;

/// Read a localization file and return an owned String. Ownership passes
/// back to the caller so the token sets extracted below can borrow from it
/// for as long as needed.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Extract the set of distinct token names appearing inside `(!Name)`
/// markup. A name is one or more word characters between the literal `(!`
/// and `)` delimiters; duplicates collapse. Text with no tokens, including
/// the empty string, gives an empty set.
pub fn extract_token_names(text: &str) -> BTreeSet<String> {
    let re = crate::compile!(r"\(!(\w+)\)");

    re.captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect()
}
