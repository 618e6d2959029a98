use std::path::{Path, PathBuf};

use crate::path_utils::same_directory;

/// Why a path could not be decomposed into its naming parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    NoFileName,
    NoParent,
    NotUtf8,
}

impl MalformedReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoFileName => "path has no file name",
            Self::NoParent => "path has no parent folder",
            Self::NotUtf8 => "path is not valid UTF-8",
        }
    }
}

/// The naming-relevant parts of a media file path, derived once per check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPath<'a> {
    pub full_path: &'a Path,
    pub root_folder: &'a Path,
    pub file_name: &'a str,
    /// File name without its final extension.
    pub stem: &'a str,
    /// Final extension without the dot; empty when the file has none.
    pub extension: &'a str,
    /// Name of the immediate parent folder; empty for a bare file name.
    pub parent_folder_name: &'a str,
    /// True when the file sits directly in `root_folder`.
    pub at_root: bool,
}

impl<'a> MediaPath<'a> {
    /// Decompose `full_path` relative to the library `root_folder`.
    ///
    /// # Errors
    /// Returns the reason when the path has no file name, no parent, or is not UTF-8.
    pub fn new(full_path: &'a Path, root_folder: &'a Path) -> Result<Self, MalformedReason> {
        let file_name = full_path
            .file_name()
            .ok_or(MalformedReason::NoFileName)?
            .to_str()
            .ok_or(MalformedReason::NotUtf8)?;
        let parent = full_path.parent().ok_or(MalformedReason::NoParent)?;

        let parent_folder_name = match parent.file_name() {
            Some(name) => name.to_str().ok_or(MalformedReason::NotUtf8)?,
            None => "",
        };

        let (stem, extension) = split_extension(file_name);

        Ok(Self {
            full_path,
            root_folder,
            file_name,
            stem,
            extension,
            parent_folder_name,
            at_root: same_directory(parent, root_folder),
        })
    }

    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        self.full_path.to_path_buf()
    }
}

/// Split on the last dot. A leading dot (hidden file) is part of the stem.
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(0) | None => (file_name, ""),
        Some(idx) => (&file_name[..idx], &file_name[idx + 1..]),
    }
}

#[cfg(test)]
#[path = "media_path_tests.rs"]
mod tests;
