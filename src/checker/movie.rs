use std::path::Path;

use chrono::Datelike;

use super::extras;
use super::media_path::MediaPath;
use super::name::{NameGrammar, NameParser};
use super::result::{Diagnostic, DiagnosticKind, VerificationResult};
use super::rules::{YearRange, check_folder, check_split_placement, check_year};
use super::tables::{DEFAULT_MIN_YEAR, MOVIE_TAG_PREFIXES};
use super::tags::validate_tags;
use super::Verifier;
use crate::config::Config;
use crate::error::Result;

/// Verifies movie files against the Plex movie naming convention.
///
/// Rule order:
/// 1. local extras (folder or inline suffix) pass immediately;
/// 2. every `{...}` tag must be `edition-`, `imdb-` or `tmdb-` (reject on first);
/// 3. the core name must match the configured [`NameGrammar`] (reject on failure);
/// 4. year range, folder consistency and split placement are evaluated
///    independently; by default the first failure is reported, with
///    `accumulate` every failure is.
#[derive(Debug, Clone)]
pub struct MovieVerifier {
    parser: NameParser,
    min_year: i32,
    accumulate: bool,
}

impl MovieVerifier {
    /// # Errors
    /// Returns an error if the name pattern for `grammar` fails to compile.
    pub fn new(grammar: NameGrammar, extensions: &[String]) -> Result<Self> {
        Ok(Self {
            parser: NameParser::new(grammar, extensions)?,
            min_year: DEFAULT_MIN_YEAR,
            accumulate: false,
        })
    }

    /// # Errors
    /// Returns an error if the name pattern fails to compile.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.naming.grammar, &config.scanner.normalized_extensions())?
            .with_min_year(config.naming.min_year)
            .with_accumulate(config.naming.accumulate))
    }

    #[must_use]
    pub const fn with_min_year(mut self, min_year: i32) -> Self {
        self.min_year = min_year;
        self
    }

    #[must_use]
    pub const fn with_accumulate(mut self, accumulate: bool) -> Self {
        self.accumulate = accumulate;
        self
    }

    #[must_use]
    pub const fn grammar(&self) -> NameGrammar {
        self.parser.grammar()
    }

    /// Verify with an explicit current year instead of the system clock.
    #[must_use]
    pub fn verify_in_year(&self, path: &Path, root: &Path, current_year: i32) -> VerificationResult {
        let media = match MediaPath::new(path, root) {
            Ok(media) => media,
            Err(reason) => {
                return VerificationResult::invalid(
                    path.to_path_buf(),
                    DiagnosticKind::MalformedPath {
                        reason: reason.as_str().to_string(),
                    },
                );
            }
        };

        if let Some(matched) = extras::classify(&media) {
            return VerificationResult::Extra {
                path: media.to_path_buf(),
                matched,
            };
        }

        let tags = match validate_tags(media.file_name, MOVIE_TAG_PREFIXES) {
            Ok(tags) => tags,
            Err(kind) => return VerificationResult::invalid(media.to_path_buf(), kind),
        };

        let name = match self.parser.parse(&media, &tags) {
            Ok(name) => name,
            Err(kind) => return VerificationResult::invalid(media.to_path_buf(), kind),
        };

        let range = YearRange::up_to_next_year(self.min_year, current_year);
        let checks = [
            check_year(&name, range),
            check_folder(&media, &name),
            check_split_placement(&media, &name),
        ];

        let limit = if self.accumulate { checks.len() } else { 1 };
        let diagnostics = checks
            .into_iter()
            .flatten()
            .take(limit)
            .map(|kind| Diagnostic::new(media.full_path, kind))
            .collect();

        VerificationResult::from_diagnostics(media.to_path_buf(), diagnostics)
    }
}

impl Verifier for MovieVerifier {
    fn verify(&self, path: &Path, root: &Path) -> VerificationResult {
        self.verify_in_year(path, root, chrono::Local::now().year())
    }
}

#[cfg(test)]
#[path = "movie_tests.rs"]
mod tests;
