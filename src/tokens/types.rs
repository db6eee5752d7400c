use std::fmt;

/// The four kinds of defect the checker can find in a translated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueKind {
    SyntaxCorrupt,
    Misspelled,
    Added,
    Removed,
}

/// A single defect found while comparing the branding tokens of a source
/// string against its translation. Offsets are zero-origin byte positions
/// into the target text; add 1 when displaying to humans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A token name found in the target text without the `(!` that must
    /// immediately precede it.
    OpeningCorrupt(usize, String),
    /// A token name found in the target text without the `)` that must
    /// immediately follow it.
    ClosingCorrupt(usize, String),
    /// A word in the target text that closely resembles a source token
    /// name but is not itself a token. Carries the name and the word.
    Misspelled(String, String),
    /// A token present in the target but absent from the source.
    Added(String),
    /// A token present in the source but absent from the target.
    Removed(String),
}

impl Issue {
    pub fn kind(&self) -> IssueKind {
        match self {
            Issue::OpeningCorrupt(_, _) => IssueKind::SyntaxCorrupt,
            Issue::ClosingCorrupt(_, _) => IssueKind::SyntaxCorrupt,
            Issue::Misspelled(_, _) => IssueKind::Misspelled,
            Issue::Added(_) => IssueKind::Added,
            Issue::Removed(_) => IssueKind::Removed,
        }
    }

    /// Position in the target text, for the issue kinds that have one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Issue::OpeningCorrupt(offset, _) => Some(*offset),
            Issue::ClosingCorrupt(offset, _) => Some(*offset),
            Issue::Misspelled(_, _) => None,
            Issue::Added(_) => None,
            Issue::Removed(_) => None,
        }
    }

    /// The token name this issue is about.
    pub fn token(&self) -> &str {
        match self {
            Issue::OpeningCorrupt(_, name) => name,
            Issue::ClosingCorrupt(_, name) => name,
            Issue::Misspelled(name, _) => name,
            Issue::Added(name) => name,
            Issue::Removed(name) => name,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::OpeningCorrupt(offset, name) => format!(
                "Branding token opening (! is corrupt at position {} for token \"{}\"",
                offset + 1,
                name
            ),
            Issue::ClosingCorrupt(offset, name) => format!(
                "Branding token closing ) is corrupt at position {} for token \"{}\"",
                offset + 1,
                name
            ),
            Issue::Misspelled(name, found) => format!(
                "Branding token \"{}\" appears misspelled as \"{}\" in the translation",
                name, found
            ),
            Issue::Added(name) => {
                format!("Branding token \"{}\" was added to the translation", name)
            }
            Issue::Removed(name) => {
                format!("Branding token \"{}\" was removed from the translation", name)
            }
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
