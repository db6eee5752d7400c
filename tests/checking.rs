#[cfg(test)]
mod integrity {
    use brandcheck::checking::{
        extract_misspelled_tokens, report_syntax_errors_for_tokens, Checker,
    };
    use brandcheck::scanning::extract_token_names;
    use brandcheck::tokens::{Issue, IssueKind};

    /// Helper to check that a (source, target) pair produces exactly the
    /// expected issues, in order.
    fn expect_issues(source: &str, target: &str, expected: &[Issue]) {
        let report = Checker::default().check(source, target);
        assert_eq!(
            report.issues, expected,
            "checking source '{}' against target '{}'",
            source, target
        );
    }

    #[test]
    fn clean_translation_reports_nothing() {
        expect_issues(
            "You have (!idftCOUNT) documents in (!ApplicationName)",
            "Sie haben (!idftCOUNT) Dokumente in (!ApplicationName)",
            &[],
        );
    }

    #[test]
    fn extraction_finds_only_intact_tokens() {
        let names = extract_token_names("(!Word_Full) or (!Word_Full_2010), not Word_Free)");

        assert_eq!(names.len(), 2);
        assert!(names.contains("Word_Full"));
        assert!(names.contains("Word_Full_2010"));
        assert!(!names.contains("Word_Free"));
    }

    #[test]
    fn broken_opening_delimiter_reported_once() {
        // exactly one syntax issue; the damaged token no longer extracts
        // from the target, so it also counts as removed.
        expect_issues(
            "(!idftCOUNT)",
            "idftCOUNT)",
            &[
                Issue::OpeningCorrupt(0, "idftCOUNT".to_string()),
                Issue::Removed("idftCOUNT".to_string()),
            ],
        );
    }

    #[test]
    fn broken_closing_delimiter_reported_once() {
        expect_issues(
            "(!idftCOUNT)",
            "(!idftCOUNT",
            &[
                Issue::ClosingCorrupt(2, "idftCOUNT".to_string()),
                Issue::Removed("idftCOUNT".to_string()),
            ],
        );
    }

    #[test]
    fn overlapping_names_anchor_the_longer_token() {
        // Word_Full is a prefix of Word_Full_2010; only the longer token
        // may be considered at that position, so an intact occurrence of
        // the longer token raises nothing for the shorter one.
        let source = "(!Word_Full) plus (!Word_Full_2010)";

        let names = extract_token_names(source);
        let issues = report_syntax_errors_for_tokens(&names, "see (!Word_Full_2010) here");
        assert!(issues.is_empty());
    }

    #[test]
    fn misspelled_token_reported_with_candidate() {
        let report = Checker::default().check(
            "Welcome to (!ApplicationName)",
            "Willkommen bei (!ApplicaionName)",
        );

        assert!(report
            .issues
            .contains(&Issue::Misspelled(
                "ApplicationName".to_string(),
                "ApplicaionName".to_string()
            )));
    }

    #[test]
    fn spurious_token_reported_as_added() {
        expect_issues(
            "(!idftCOUNT)",
            "(!idftCOUNT) und (!idftSUM)",
            &[Issue::Added("idftSUM".to_string())],
        );
    }

    #[test]
    fn dropped_token_reported_as_removed() {
        expect_issues(
            "(!idftCOUNT) and (!idftSUM)",
            "(!idftCOUNT)",
            &[Issue::Removed("idftSUM".to_string())],
        );
    }

    #[test]
    fn misspelling_supersedes_added_and_removed() {
        // ApplicationName is gone from the target and a look-alike is
        // present; that is one defect, reported once as a misspelling,
        // not again as removed (nor the look-alike as added).
        let report = Checker::default().check(
            "Welcome to (!ApplicationName)",
            "Willkommen bei (!ApplicaionName)",
        );

        let kinds: Vec<IssueKind> = report
            .issues
            .iter()
            .map(|issue| issue.kind())
            .collect();

        assert!(kinds.contains(&IssueKind::Misspelled));
        assert!(!kinds.contains(&IssueKind::Added));
        assert!(!kinds.contains(&IssueKind::Removed));
    }

    #[test]
    fn distance_threshold_is_inclusive_at_the_ceiling() {
        let names = extract_token_names("(!brandtoken)");

        // budget is ceil(0.2 × 10) = 2; distance exactly 2 is reported
        let found = extract_misspelled_tokens(&names, "brandtokXX", 0.2);
        assert!(found.contains_key("brandtoken"));

        // distance 3 is past the ceiling
        let found = extract_misspelled_tokens(&names, "brandtoXXX", 0.2);
        assert!(found.is_empty());
    }

    #[test]
    fn checking_is_idempotent() {
        let source = "(!idftCOUNT) and (!idftSUM)";
        let target = "idftCOUNT) and (!idftSUN)";

        let first = Checker::default().check(source, target);
        let second = Checker::default().check(source, target);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_inputs_degrade_gracefully() {
        expect_issues("", "", &[]);
        expect_issues("no tokens here", "keine Tokens hier", &[]);

        let report = Checker::default().check("(!idftCOUNT)", "");
        assert_eq!(report.issues, vec![Issue::Removed("idftCOUNT".to_string())]);
    }

    #[test]
    fn report_carries_both_token_sets() {
        let report = Checker::default().check("(!idftCOUNT)", "(!idftCOUNT) und (!idftSUM)");

        assert!(report
            .source_tokens
            .contains("idftCOUNT"));
        assert!(report
            .target_tokens
            .contains("idftSUM"));
    }
}
