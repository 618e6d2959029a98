use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar shown while files are verified.
///
/// Hidden in quiet mode or when stderr is not a TTY. Cloning shares the
/// counter, so clones can be moved into rayon workers.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
    checked: Arc<AtomicU64>,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        Self::with_visibility(total, !quiet && std::io::stderr().is_terminal())
    }

    fn with_visibility(total: u64, visible: bool) -> Self {
        let progress_bar = if visible {
            Self::visible_bar(total)
        } else {
            ProgressBar::hidden()
        };

        Self {
            progress_bar,
            checked: Arc::new(AtomicU64::new(0)),
        }
    }

    fn visible_bar(total: u64) -> ProgressBar {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} Checking [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        ProgressBar::new(total).with_style(style)
    }

    /// Record one verified file. Safe to call from worker threads.
    pub fn inc(&self) {
        let count = self.checked.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    #[must_use]
    pub fn checked(&self) -> u64 {
        self.checked.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
