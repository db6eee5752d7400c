use crate::tokens::Issue;

/// Generate problem and detail messages for an issue. The problem is a
/// one-line headline; the details explain the defect and what restoring
/// the token should look like.
pub fn generate_issue_message(issue: &Issue) -> (String, String) {
    match issue {
        Issue::OpeningCorrupt(_, name) => (
            format!("Branding token opening (! is corrupt for \"{}\"", name),
            format!(
                r#"
The name "{}" from the source string appears in the translation without
the (! marker that must immediately precede it. Branding tokens are
substituted with a product name at a later build step; when the markup
around the name is damaged the substitution cannot happen and the bare
name leaks into the shipped product. Restore the token to the form
(!{}).
                "#,
                name, name
            )
            .trim_ascii()
            .to_string(),
        ),
        Issue::ClosingCorrupt(_, name) => (
            format!("Branding token closing ) is corrupt for \"{}\"", name),
            format!(
                r#"
The name "{}" from the source string appears in the translation without
the ) that must immediately follow it. Branding tokens are substituted
with a product name at a later build step; when the markup around the
name is damaged the substitution cannot happen and the bare name leaks
into the shipped product. Restore the token to the form (!{}).
                "#,
                name, name
            )
            .trim_ascii()
            .to_string(),
        ),
        Issue::Misspelled(name, found) => (
            format!("Branding token \"{}\" appears misspelled", name),
            format!(
                r#"
The translation contains the word "{}", which closely resembles the
token name "{}" but is not an exact match. Substitution at build time
only recognizes the exact name, so a misspelled token will ship as-is.
If this word was meant to be the token, correct it to (!{}).
                "#,
                found, name, name
            )
            .trim_ascii()
            .to_string(),
        ),
        Issue::Added(name) => (
            format!("Branding token \"{}\" was added to the translation", name),
            format!(
                r#"
The translation contains the token (!{}) but the source string does
not. Translators must carry tokens across unchanged, never introduce
new ones; an added token usually means markup was pasted into the wrong
string or a name was altered beyond recognition.
                "#,
                name
            )
            .trim_ascii()
            .to_string(),
        ),
        Issue::Removed(name) => (
            format!("Branding token \"{}\" was removed from the translation", name),
            format!(
                r#"
The source string contains the token (!{}) but the translation does
not. Every token in the source must survive translation intact so the
product name can be substituted at build time. Reinstate the token in
the translated text.
                "#,
                name
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}
