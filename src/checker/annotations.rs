//! Helpers for the two annotation forms a name may carry: `[...]` brackets,
//! which are ignored, and `{...}` brace tags, which must be recognised.

use std::sync::LazyLock;

use regex::Regex;

static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[[^\]]*\]").expect("Invalid regex"));

static BRACE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{.*?\}").expect("Invalid regex"));

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Remove every `[...]` annotation along with the whitespace before it.
///
/// A string without brackets is returned unchanged.
#[must_use]
pub fn strip_brackets(name: &str) -> String {
    BRACKETS.replace_all(name, "").into_owned()
}

/// Remove every `{...}` tag.
#[must_use]
pub fn strip_brace_tags(name: &str) -> String {
    BRACE_TAG.replace_all(name, "").into_owned()
}

/// Iterate the `{...}` tags of a name, braces included, in order of appearance.
pub fn brace_tags(name: &str) -> impl Iterator<Item = &str> {
    BRACE_TAG.find_iter(name).map(|m| m.as_str())
}

/// Inner text of a brace tag, e.g. `imdb-tt0113277` for `{imdb-tt0113277}`.
#[must_use]
pub fn tag_content(tag: &str) -> &str {
    tag.strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .unwrap_or(tag)
}

/// Collapse whitespace runs to single spaces and trim both ends.
#[must_use]
pub fn collapse_whitespace(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name.trim(), " ").into_owned()
}

/// Case-insensitive ASCII prefix test that never panics on char boundaries.
#[must_use]
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Case-insensitive ASCII suffix test that never panics on char boundaries.
#[must_use]
pub fn ends_with_ignore_case(text: &str, suffix: &str) -> bool {
    let Some(start) = text.len().checked_sub(suffix.len()) else {
        return false;
    };
    text.is_char_boundary(start) && text[start..].eq_ignore_ascii_case(suffix)
}

#[cfg(test)]
#[path = "annotations_tests.rs"]
mod tests;
