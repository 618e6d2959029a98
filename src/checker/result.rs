use std::path::{Path, PathBuf};

use serde::Serialize;

use super::extras::ExtrasMatch;

/// A single reason a file failed a naming rule.
///
/// Carries only the values a formatter needs; rendering to prose happens in
/// the output layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The path could not be split into folder and file name.
    MalformedPath { reason: String },
    /// A `{...}` tag does not start with a recognised prefix.
    InvalidTag {
        tag: String,
        allowed_prefixes: Vec<String>,
    },
    /// The name does not fit `Title (YYYY)` with optional tags and split suffix.
    StructuralMismatch { name: String },
    /// The year is not numeric or falls outside the accepted range.
    YearOutOfRange { value: String, min: i32, max: i32 },
    /// The parent folder does not describe the same title, year and edition.
    FolderMismatch { actual: String, expected: String },
    /// A multi-part suffix was found on a file directly in the library root.
    MisplacedSplitSuffix { suffix: String },
    /// An episode file carries no `SxxEyy` marker.
    MissingEpisodeMarker { name: String },
}

impl DiagnosticKind {
    /// Stable identifier of the rule that produced this diagnostic.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::MalformedPath { .. } => "malformed_path",
            Self::InvalidTag { .. } => "invalid_tag",
            Self::StructuralMismatch { .. } => "structural_mismatch",
            Self::YearOutOfRange { .. } => "year_out_of_range",
            Self::FolderMismatch { .. } => "folder_mismatch",
            Self::MisplacedSplitSuffix { .. } => "misplaced_split_suffix",
            Self::MissingEpisodeMarker { .. } => "missing_episode_marker",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: DiagnosticKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Outcome of verifying one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    Valid {
        path: PathBuf,
    },
    /// Exempt from naming rules because it is a local extra.
    Extra {
        path: PathBuf,
        matched: ExtrasMatch,
    },
    /// At least one rule failed. `diagnostics` is never empty.
    Invalid {
        path: PathBuf,
        diagnostics: Vec<Diagnostic>,
    },
}

impl VerificationResult {
    /// Build an invalid result from the diagnostics gathered so far, or a
    /// valid one when there are none.
    #[must_use]
    pub fn from_diagnostics(path: PathBuf, diagnostics: Vec<Diagnostic>) -> Self {
        if diagnostics.is_empty() {
            Self::Valid { path }
        } else {
            Self::Invalid { path, diagnostics }
        }
    }

    #[must_use]
    pub fn invalid(path: PathBuf, kind: DiagnosticKind) -> Self {
        let diagnostic = Diagnostic::new(path.clone(), kind);
        Self::Invalid {
            path,
            diagnostics: vec![diagnostic],
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Valid { path } | Self::Extra { path, .. } | Self::Invalid { path, .. } => path,
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Invalid { diagnostics, .. } => diagnostics,
            Self::Valid { .. } | Self::Extra { .. } => &[],
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !self.is_invalid()
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    #[must_use]
    pub const fn is_extra(&self) -> bool {
        matches!(self, Self::Extra { .. })
    }

    /// Short status label used in reports.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Valid { .. } => "valid",
            Self::Extra { .. } => "extra",
            Self::Invalid { .. } => "invalid",
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
