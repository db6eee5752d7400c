//! Integrity checks for branding tokens in localized strings.
//!
//! Source strings carry placeholders of the form `(!Name)` which are
//! substituted with a product name at a later build step. Translation
//! frequently damages that markup: delimiters get dropped, names get
//! misspelled, whole tokens appear or disappear. This crate scans a
//! (source, target) pair of strings and reports each such defect as an
//! [`Issue`](tokens::Issue) rather than failing; malformed markup is the
//! expected input here, not an error.

pub mod checking;
pub mod output;
pub mod problem;
pub mod regex;
pub mod scanning;
pub mod tokens;
