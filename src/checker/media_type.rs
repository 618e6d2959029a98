use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static TV_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)S\d{1,2}E\d{1,2}").expect("Invalid regex"));

/// Kind of library being checked; selects the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Movie,
    Tv,
}

impl MediaType {
    /// Guess from discovered files: any `SxxEyy` marker in a path means TV.
    #[must_use]
    pub fn guess(files: &[PathBuf]) -> Self {
        if files
            .iter()
            .any(|file| TV_MARKER.is_match(&file.to_string_lossy()))
        {
            Self::Tv
        } else {
            Self::Movie
        }
    }

    /// Upper-case label used in report banners.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Movie => "MOVIE",
            Self::Tv => "TV",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => f.write_str("movie"),
            Self::Tv => f.write_str("tv"),
        }
    }
}

/// Accepts any word whose first two letters identify the type:
/// `mo`/`fi` (movie, film) or `tv`/`sh`/`te` (tv, show, television).
impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.trim().to_lowercase().chars().take(2).collect();
        match key.as_str() {
            "mo" | "fi" => Ok(Self::Movie),
            "tv" | "sh" | "te" => Ok(Self::Tv),
            _ => Err(format!(
                "Unknown media type override '{s}'. Use 'movie' or 'tv'."
            )),
        }
    }
}

#[cfg(test)]
#[path = "media_type_tests.rs"]
mod tests;
