use super::messages::generate_issue_message;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::tokens::{Issue, LoadingError};

/// Format an issue with full details. Issues that carry a position into
/// the target text get the offending line quoted with a caret under the
/// corrupt token; set-level issues (added, removed, misspelled) have no
/// single position and get the headline and details only.
pub fn full_issue<'i>(issue: &Issue, filename: &'i Path, target: &'i str) -> String {
    let (problem, details) = generate_issue_message(issue);

    match issue.offset() {
        Some(offset) => {
            let i = calculate_line_number(target, offset);
            let j = calculate_column_number(target, offset);

            let code = target
                .lines()
                .nth(i)
                .unwrap_or("?");
            let line = i + 1;
            let column = j + 1;
            let width = 3.max(
                line.to_string()
                    .len(),
            );

            format!(
                r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
                "#,
                "error".bright_red(),
                filename.to_string_lossy(),
                line,
                column,
                problem.bold(),
                ' ',
                '|'.bright_blue(),
                line.bright_blue(),
                '|'.bright_blue(),
                code,
                ' ',
                '|'.bright_blue(),
                '^'.bright_red(),
                details
            )
            .trim_ascii()
            .to_string()
        }
        None => format!(
            r#"
{}: {}: {}

{}
            "#,
            "error".bright_red(),
            filename.to_string_lossy(),
            problem.bold(),
            details
        )
        .trim_ascii()
        .to_string(),
    }
}

/// Format an issue as a single line, using the exact message the checking
/// engine assigns to it.
pub fn concise_issue<'i>(issue: &Issue, filename: &'i Path, target: &'i str) -> String {
    match issue.offset() {
        Some(offset) => {
            let line = calculate_line_number(target, offset) + 1;
            let column = calculate_column_number(target, offset) + 1;

            format!(
                "{}: {}:{}:{} {}",
                "error".bright_red(),
                filename.to_string_lossy(),
                line,
                column,
                issue
                    .message()
                    .bold(),
            )
        }
        None => format!(
            "{}: {}: {}",
            "error".bright_red(),
            filename.to_string_lossy(),
            issue
                .message()
                .bold(),
        ),
    }
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}:{}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

// This returns a zero-origin result so that it can subsequently be used
// for line splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number, also zero-origin for consistency.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
