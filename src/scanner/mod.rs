mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, MediaFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for scanning a library root and finding media files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths in traversal order.
    ///
    /// # Errors
    /// Returns an error if the root is missing, is not a directory, or cannot
    /// be enumerated.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
