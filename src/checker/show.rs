use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::Verifier;
use super::annotations::{strip_brace_tags, strip_brackets};
use super::extras;
use super::media_path::MediaPath;
use super::result::{DiagnosticKind, VerificationResult};
use super::tables::SHOW_TAG_PREFIXES;
use super::tags::validate_tags;

static EPISODE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)s\d{1,4}e\d{1,4}").expect("Invalid regex"));

/// Light-weight checks for TV episode files: extras are exempt, brace tags
/// must be ID tags, and the name must carry an `SxxEyy` marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowVerifier;

impl ShowVerifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Verifier for ShowVerifier {
    fn verify(&self, path: &Path, root: &Path) -> VerificationResult {
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

        if let Err(kind) = validate_tags(media.file_name, SHOW_TAG_PREFIXES) {
            return VerificationResult::invalid(media.to_path_buf(), kind);
        }

        let core = strip_brace_tags(&strip_brackets(media.stem));
        if EPISODE_MARKER.is_match(&core) {
            VerificationResult::Valid {
                path: media.to_path_buf(),
            }
        } else {
            VerificationResult::invalid(
                media.to_path_buf(),
                DiagnosticKind::MissingEpisodeMarker {
                    name: core.trim().to_string(),
                },
            )
        }
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
