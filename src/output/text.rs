use std::fmt::Write;

use crate::error::Result;

use super::report::{ScanReport, Summary, group_thousands};
use super::{ReportFormatter, message};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(format!("Unknown color mode: {s}")),
        }
    }
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

const HEADER: &str = "\
Strict file format checking:

File format checks are very strict. A file marked as invalid in this report
does not necessarily mean there is a problem with it in Plex.

Resources:

- https://support.plex.tv/articles/naming-and-organizing-your-tv-show-files/
- https://support.plex.tv/articles/naming-and-organizing-your-movie-files/";

/// Plain-text report with BEGIN/END banners.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn write_results(report: &ScanReport, out: &mut String) {
        for result in report.invalid_results() {
            let _ = write!(out, "\n{}\n", result.path().display());
            for diagnostic in result.diagnostics() {
                let _ = writeln!(out, "  {}", message::render(&diagnostic.kind));
            }
        }
    }

    fn write_summary(&self, summary: &Summary, out: &mut String) {
        let _ = writeln!(out, "Valid files:          {:>6}", group_thousands(summary.valid));
        let _ = writeln!(out, "Invalid files:        {:>6}", group_thousands(summary.invalid));
        let _ = writeln!(out, "Total files checked:  {:>6}", group_thousands(summary.total));

        let correctness = summary.correctness();
        let line = format!("{correctness:>6.2}% {}", summary.qualifier());
        let _ = writeln!(
            out,
            "Correctness:          {}",
            self.colorize_correctness(line.trim_end(), correctness)
        );
    }

    fn colorize_correctness(&self, text: &str, correctness: f64) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let color = if correctness >= 95.0 {
            ansi::GREEN
        } else if correctness >= 85.0 {
            ansi::YELLOW
        } else {
            ansi::RED
        };
        format!("{color}{text}{}", ansi::RESET)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let label = report.media_type.label();
        let mut out = String::new();

        let _ = writeln!(out, "---------- BEGIN {label} REPORT ----------");
        let _ = writeln!(out);
        let _ = writeln!(out, "{HEADER}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Scan results:");

        Self::write_results(report, &mut out);

        let _ = writeln!(out);
        let _ = writeln!(out, "Summary:");
        let _ = writeln!(out);
        self.write_summary(&report.summary(), &mut out);
        let _ = writeln!(out);
        let _ = writeln!(out, "---------- END {label} REPORT ----------");

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
