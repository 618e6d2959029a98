use super::annotations::{ends_with_ignore_case, strip_brackets};
use super::media_path::MediaPath;
use super::tables::{EXTRAS_FOLDERS, INLINE_EXTRAS_SUFFIXES};

/// Which extras rule exempted a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtrasRule {
    /// Parent folder is one of the extras folders.
    Folder,
    /// File name ends with an inline extras suffix.
    InlineSuffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtrasMatch {
    pub rule: ExtrasRule,
    /// The table entry that matched.
    pub entry: &'static str,
}

/// Classify a file as a local extra. Folder form is checked before inline form.
#[must_use]
pub fn classify(media: &MediaPath<'_>) -> Option<ExtrasMatch> {
    match_extras_folder(media.parent_folder_name)
        .map(|entry| ExtrasMatch {
            rule: ExtrasRule::Folder,
            entry,
        })
        .or_else(|| {
            match_inline_suffix(media.stem).map(|entry| ExtrasMatch {
                rule: ExtrasRule::InlineSuffix,
                entry,
            })
        })
}

/// Match a folder name (bracket annotations ignored) against the extras folders.
#[must_use]
pub fn match_extras_folder(folder_name: &str) -> Option<&'static str> {
    let cleaned = strip_brackets(folder_name);
    let cleaned = cleaned.trim();
    EXTRAS_FOLDERS
        .iter()
        .copied()
        .find(|name| name.eq_ignore_ascii_case(cleaned))
}

/// Match a file stem against the inline extras suffixes.
#[must_use]
pub fn match_inline_suffix(stem: &str) -> Option<&'static str> {
    INLINE_EXTRAS_SUFFIXES
        .iter()
        .copied()
        .find(|suffix| ends_with_ignore_case(stem, suffix))
}

#[cfg(test)]
#[path = "extras_tests.rs"]
mod tests;
