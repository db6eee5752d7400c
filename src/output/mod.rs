//! Report generation for the brandcheck CLI application

use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::tokens::{Issue, IssueKind};

/// One issue, flattened for machine consumption. Positions are 1-based,
/// matching what the human-readable messages cite.
#[derive(Serialize)]
pub struct IssueRecord {
    kind: &'static str,
    token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    found: Option<String>,
    message: String,
}

impl IssueRecord {
    pub fn from_issue(issue: &Issue) -> IssueRecord {
        let kind = match issue.kind() {
            IssueKind::SyntaxCorrupt => "syntax-corrupt",
            IssueKind::Misspelled => "misspelled",
            IssueKind::Added => "added",
            IssueKind::Removed => "removed",
        };

        let found = match issue {
            Issue::Misspelled(_, found) => Some(found.clone()),
            _ => None,
        };

        IssueRecord {
            kind,
            token: issue
                .token()
                .to_string(),
            position: issue
                .offset()
                .map(|offset| offset + 1),
            found,
            message: issue.message(),
        }
    }
}

/// Write the issues found for one resource as a JSON array.
pub fn write_report(issues: &[Issue], writer: &mut impl Write) -> std::io::Result<()> {
    debug!("writing {} issue records", issues.len());

    let records: Vec<IssueRecord> = issues
        .iter()
        .map(IssueRecord::from_issue)
        .collect();

    serde_json::to_writer_pretty(&mut *writer, &records)?;
    writeln!(writer)?;

    Ok(())
}
