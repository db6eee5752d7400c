use std::collections::{BTreeMap, BTreeSet};

/// Find every position in `text` where one of the given token names occurs
/// as a literal substring, resolving overlaps in favour of the longest
/// name. Token names in this domain are frequently prefixes of other token
/// names (`Word_Full` vs `Word_Full_2010`); processing names by descending
/// length and claiming start offsets as we go means a shorter name that is
/// a prefix of a longer name already anchored at the same position is never
/// separately recorded.
///
/// Offsets are byte positions into `text`. Length ties break
/// lexicographically so the result is stable for a given input.
pub(crate) fn locate_occurrences(
    names: &BTreeSet<String>,
    text: &str,
) -> BTreeMap<usize, String> {
    let mut ordered: Vec<&String> = names
        .iter()
        .collect();
    ordered.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then(a.cmp(b))
    });

    let mut found: BTreeMap<usize, String> = BTreeMap::new();

    for name in ordered {
        if name.is_empty() {
            continue;
        }
        let mut position = 0;
        while let Some(i) = text[position..].find(name.as_str()) {
            let offset = position + i;
            match found.get(&offset) {
                Some(existing) => {
                    // a longer (or equal) name already claimed this start
                    // offset; skip past its span entirely.
                    position = offset + existing.len();
                }
                None => {
                    position = offset + name.len();
                    found.insert(offset, name.clone());
                }
            }
        }
    }

    found
}
