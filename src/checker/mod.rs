//! Naming rule engine.
//!
//! Verifiers are pure functions of a file path and the library root: they
//! perform no I/O and hold no mutable state, so one instance can be shared
//! across threads.

mod annotations;
mod extras;
mod media_path;
mod media_type;
mod movie;
mod name;
mod result;
mod rules;
mod show;
mod tables;
mod tags;

pub use annotations::strip_brackets;
pub use extras::{ExtrasMatch, ExtrasRule};
pub use media_path::{MalformedReason, MediaPath};
pub use media_type::MediaType;
pub use movie::MovieVerifier;
pub use name::{NameComponents, NameGrammar, NameParser, SplitSuffix};
pub use result::{Diagnostic, DiagnosticKind, VerificationResult};
pub use rules::YearRange;
pub use show::ShowVerifier;
pub use tables::{
    DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS, DEFAULT_MIN_YEAR, EXTRAS_FOLDERS,
    INLINE_EXTRAS_SUFFIXES, MOVIE_TAG_PREFIXES, SHOW_TAG_PREFIXES, SPLIT_TOKENS,
};
pub use tags::{ExternalId, MetadataSource};

use std::path::Path;

pub trait Verifier: Send + Sync {
    /// Verify one media file located somewhere below `root`.
    fn verify(&self, path: &Path, root: &Path) -> VerificationResult;
}

/// Build the verifier for `media_type`.
///
/// # Errors
/// Returns an error if the movie name pattern fails to compile.
pub fn verifier_for(
    media_type: MediaType,
    config: &crate::config::Config,
) -> crate::Result<Box<dyn Verifier>> {
    Ok(match media_type {
        MediaType::Movie => Box::new(MovieVerifier::from_config(config)?),
        MediaType::Tv => Box::new(ShowVerifier::new()),
    })
}
