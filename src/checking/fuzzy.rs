use std::collections::{BTreeMap, BTreeSet};

use super::distance::damerau_levenshtein;

/// Search the target text for words that look like misspelled source token
/// names. Words are maximal runs of word characters; a word is recorded
/// under a name when its Damerau-Levenshtein distance from that name is
/// nonzero but within the budget `ceil(sensitivity × name length)`, and
/// the word is not itself one of the source token names. An exact match is
/// not a defect, and a different legitimately-used token must not be
/// mistaken for a corruption of this one.
///
/// One name may collect several candidate words, and several names may
/// each find candidates in the same text independently.
pub fn extract_misspelled_tokens(
    source_names: &BTreeSet<String>,
    target: &str,
    sensitivity: f64,
) -> BTreeMap<String, Vec<String>> {
    let words: Vec<&str> = crate::compile!(r"\w+")
        .find_iter(target)
        .map(|found| found.as_str())
        .collect();

    let mut found: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for name in source_names {
        let length = name
            .chars()
            .count();
        let budget = (sensitivity * length as f64).ceil() as usize;

        for word in &words {
            // words whose length is outside the budget cannot be within
            // the edit distance either, so skip the matrix for them.
            let width = word
                .chars()
                .count();
            if width.abs_diff(length) > budget {
                continue;
            }

            if source_names.contains(*word) {
                continue;
            }

            let distance = damerau_levenshtein(name, word);
            if distance > 0 && distance <= budget {
                found
                    .entry(name.clone())
                    .or_default()
                    .push(word.to_string());
            }
        }
    }

    found
}
