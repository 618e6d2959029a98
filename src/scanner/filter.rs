use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScannerConfig;
use crate::error::{Result, ShelfGuardError};

pub trait FileFilter {
    /// Whether a file should be handed to a verifier.
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walker should descend into a directory.
    fn should_descend(&self, dir: &Path) -> bool;
}

/// Selects media files by extension and prunes excluded folders.
///
/// Extension and folder-name comparisons are case-insensitive. Glob excludes
/// are tested against the full path as produced by the walker, so patterns
/// usually start with `**/`.
pub struct MediaFilter {
    extensions: Vec<String>,
    exclude_dirs: Vec<String>,
    exclude_patterns: GlobSet,
}

impl MediaFilter {
    /// Create a new filter.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(
        extensions: &[String],
        exclude_dirs: &[String],
        exclude_patterns: &[String],
    ) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| ShelfGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|source| ShelfGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source,
            })?;

        Ok(Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            exclude_dirs: exclude_dirs
                .iter()
                .map(|dir| dir.trim().to_lowercase())
                .collect(),
            exclude_patterns,
        })
    }

    /// Build a filter from the `[scanner]` section.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        Self::new(
            &config.normalized_extensions(),
            &config.exclude_dirs,
            &config.exclude,
        )
    }

    fn has_media_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    fn is_excluded_dir_name(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.exclude_dirs.contains(&name.to_lowercase()))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for MediaFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_media_extension(path) && !self.is_excluded(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        !self.is_excluded_dir_name(dir) && !self.is_excluded(dir)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
