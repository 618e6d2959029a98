//! Checks that run after the name has been parsed. Each one is independent
//! and returns at most one diagnostic.

use std::sync::LazyLock;

use regex::Regex;

use super::annotations::{collapse_whitespace, strip_brackets};
use super::media_path::MediaPath;
use super::name::NameComponents;
use super::result::DiagnosticKind;

static EXTERNAL_ID_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{(?:imdb|tmdb)-[^}]*\}").expect("Invalid regex"));

/// Inclusive range of accepted release years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// `min ..= current_year + 1`.
    #[must_use]
    pub const fn up_to_next_year(min: i32, current_year: i32) -> Self {
        Self {
            min,
            max: current_year + 1,
        }
    }

    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

/// The year must parse as an integer inside `range`.
#[must_use]
pub fn check_year(name: &NameComponents, range: YearRange) -> Option<DiagnosticKind> {
    match name.year_value() {
        Some(year) if range.contains(year) => None,
        _ => Some(DiagnosticKind::YearOutOfRange {
            value: name.year.clone(),
            min: range.min,
            max: range.max,
        }),
    }
}

/// A file below the root must live in a folder named after its title, year
/// and edition. Whitespace runs are collapsed on both sides before comparing.
/// Files directly in the root are not checked.
#[must_use]
pub fn check_folder(media: &MediaPath<'_>, name: &NameComponents) -> Option<DiagnosticKind> {
    if media.at_root {
        return None;
    }

    let actual = normalize_folder_name(media.parent_folder_name);
    let expected = collapse_whitespace(&name.expected_folder_name());

    if actual.to_lowercase() == expected.to_lowercase() {
        None
    } else {
        Some(DiagnosticKind::FolderMismatch { actual, expected })
    }
}

/// Folder name with `[...]` annotations and ID tags removed, whitespace collapsed.
#[must_use]
pub fn normalize_folder_name(folder_name: &str) -> String {
    let without_brackets = strip_brackets(folder_name);
    let without_ids = EXTERNAL_ID_TAG.replace_all(&without_brackets, "");
    collapse_whitespace(&without_ids)
}

/// A split suffix needs a movie folder to group the parts; it is not allowed
/// on a file directly in the root.
#[must_use]
pub fn check_split_placement(media: &MediaPath<'_>, name: &NameComponents) -> Option<DiagnosticKind> {
    match &name.split {
        Some(split) if media.at_root => Some(DiagnosticKind::MisplacedSplitSuffix {
            suffix: split.raw.clone(),
        }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
