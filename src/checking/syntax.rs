use std::collections::BTreeSet;

use crate::scanning::locate_occurrences;
use crate::tokens::Issue;

/// Check that every occurrence of a source token name in the target text
/// still carries its `(!` and `)` delimiters. The two delimiters are
/// checked independently, so a single occurrence can produce zero, one, or
/// two issues. Inspection is byte-wise; the delimiters are ASCII, so this
/// is safe at any offset in valid UTF-8.
pub fn report_syntax_errors_for_tokens(
    source_names: &BTreeSet<String>,
    target: &str,
) -> Vec<Issue> {
    let bytes = target.as_bytes();
    let mut issues = Vec::new();

    for (offset, name) in locate_occurrences(source_names, target) {
        // there is no room for "(!" before position 2, so small offsets
        // fail the check outright.
        let opened = offset >= 2 && bytes[offset - 2] == b'(' && bytes[offset - 1] == b'!';
        if !opened {
            issues.push(Issue::OpeningCorrupt(offset, name.clone()));
        }

        let end = offset + name.len();
        if bytes.get(end) != Some(&b')') {
            issues.push(Issue::ClosingCorrupt(offset, name));
        }
    }

    issues
}

#[cfg(test)]
mod check {
    use super::*;

    fn names(values: &[&str]) -> BTreeSet<String> {
        values
            .iter()
            .map(|v| v.to_string())
            .collect()
    }

    #[test]
    fn intact_markup_passes() {
        let issues = report_syntax_errors_for_tokens(
            &names(&["idftCOUNT"]),
            "You have (!idftCOUNT) documents",
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn missing_opening_reported() {
        let issues = report_syntax_errors_for_tokens(&names(&["idftCOUNT"]), "idftCOUNT)");

        assert_eq!(issues, vec![Issue::OpeningCorrupt(0, "idftCOUNT".to_string())]);
        assert_eq!(
            issues[0].message(),
            "Branding token opening (! is corrupt at position 1 for token \"idftCOUNT\""
        );
    }

    #[test]
    fn missing_closing_reported() {
        let issues = report_syntax_errors_for_tokens(&names(&["idftCOUNT"]), "(!idftCOUNT");

        assert_eq!(issues, vec![Issue::ClosingCorrupt(2, "idftCOUNT".to_string())]);
    }

    #[test]
    fn both_delimiters_missing_reported_separately() {
        let issues = report_syntax_errors_for_tokens(&names(&["idftCOUNT"]), "see idftCOUNT here");

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0], Issue::OpeningCorrupt(4, "idftCOUNT".to_string()));
        assert_eq!(issues[1], Issue::ClosingCorrupt(4, "idftCOUNT".to_string()));
    }

    #[test]
    fn name_at_start_of_string_cannot_be_opened() {
        // offset 1 leaves room for only one preceding character
        let issues = report_syntax_errors_for_tokens(&names(&["idftCOUNT"]), "!idftCOUNT)");

        assert_eq!(issues, vec![Issue::OpeningCorrupt(1, "idftCOUNT".to_string())]);
    }

    #[test]
    fn prefix_name_not_checked_inside_longer_token() {
        let issues = report_syntax_errors_for_tokens(
            &names(&["Word_Full", "Word_Full_2010"]),
            "see (!Word_Full_2010) here",
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn multibyte_neighbours_handled() {
        let issues = report_syntax_errors_for_tokens(&names(&["idftCOUNT"]), "«idftCOUNT»");

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].kind(), crate::tokens::IssueKind::SyntaxCorrupt);
    }
}
