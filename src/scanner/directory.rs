use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{FileFilter, FileScanner};
use crate::error::{Result, ShelfGuardError};

/// Walks a library root depth-first with entries sorted by file name.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn resolve_root(root: &Path) -> Result<PathBuf> {
        if !root.exists() {
            return Err(ShelfGuardError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ShelfGuardError::RootNotDirectory(root.to_path_buf()));
        }
        Ok(dunce::canonicalize(root)?)
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        entry.depth() == 0 || !entry.file_type().is_dir() || self.filter.should_descend(entry.path())
    }

    fn scan_impl(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.keep_entry(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_skippable(&err) => {
                    tracing::warn!(
                        path = ?err.path(),
                        "skipping unreadable entry: {err}"
                    );
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Permission problems below the root are skipped; anything else aborts.
fn is_skippable(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err
            .io_error()
            .is_some_and(|io| io.kind() == ErrorKind::PermissionDenied)
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = Self::resolve_root(root)?;
        tracing::info!(root = %root.display(), "scanning library");
        let files = self.scan_impl(&root)?;
        tracing::info!(count = files.len(), "scan finished");
        Ok(files)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
