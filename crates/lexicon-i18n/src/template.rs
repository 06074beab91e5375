//! `{name}` placeholder scanning and substitution.
//!
//! A placeholder is an opening brace, one or more ASCII word characters
//! (`[A-Za-z0-9_]`) and a closing brace. Anything else, including an unclosed
//! `{name` or `{}`, is ordinary text.

use crate::params::Params;

/// Substitutes every placeholder found in `template`.
///
/// Present keys are replaced by their value (explicit nulls by nothing);
/// absent keys, or no params at all, keep the literal `{name}` token.
pub fn format(template: &str, params: Option<&Params>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(name) = placeholder_name(after) else {
            rendered.push('{');
            rest = after;
            continue;
        };
        match params.and_then(|params| params.get(name)) {
            Some(value) => rendered.push_str(value.unwrap_or_default()),
            None => {
                rendered.push('{');
                rendered.push_str(name);
                rendered.push('}');
            }
        }
        rest = &after[name.len() + 1..];
    }
    rendered.push_str(rest);
    rendered
}

/// Names of the well-formed placeholders in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match placeholder_name(after) {
            Some(name) => {
                names.push(name);
                rest = &after[name.len() + 1..];
            }
            None => rest = after,
        }
    }
    names
}

/// `input` starts right after an opening brace.
fn placeholder_name(input: &str) -> Option<&str> {
    let end = input.find(|ch: char| !is_word_char(ch))?;
    if end == 0 || !input[end..].starts_with('}') {
        return None;
    }
    Some(&input[..end])
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
