use std::collections::{BTreeMap, BTreeSet};

use crate::tokens::Issue;

/// Compare the token sets of the two sides and report names present on
/// only one of them. Names the fuzzy search has already explained are
/// subtracted first: a token whose look-alike was found in the target is
/// reported once, as a misspelling, not a second time as added or removed.
pub fn find_added_and_removed(
    source_names: &BTreeSet<String>,
    target_names: &BTreeSet<String>,
    misspellings: &BTreeMap<String, Vec<String>>,
) -> (Vec<Issue>, Vec<Issue>) {
    let explained: BTreeSet<&String> = misspellings
        .values()
        .flatten()
        .collect();

    let added = target_names
        .iter()
        .filter(|name| !source_names.contains(*name))
        .filter(|name| !explained.contains(name))
        .map(|name| Issue::Added(name.clone()))
        .collect();

    let removed = source_names
        .iter()
        .filter(|name| !target_names.contains(*name))
        .filter(|name| !misspellings.contains_key(*name))
        .map(|name| Issue::Removed(name.clone()))
        .collect();

    (added, removed)
}
