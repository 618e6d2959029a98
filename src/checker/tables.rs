//! Fixed lookup sets used by the naming rules.
//!
//! Every rule in this module tree reads its vocabulary from here so each entry
//! can be tested in isolation.

/// Folder names that mark their contents as local extras.
pub const EXTRAS_FOLDERS: &[&str] = &[
    "Behind The Scenes",
    "Deleted Scenes",
    "Featurettes",
    "Interviews",
    "Scenes",
    "Shorts",
    "Trailers",
    "Other",
];

/// Filename suffixes (before the extension) that mark a file as an inline extra.
pub const INLINE_EXTRAS_SUFFIXES: &[&str] = &[
    "-behindthescenes",
    "-deleted",
    "-featurette",
    "-interview",
    "-scene",
    "-short",
    "-trailer",
    "-other",
];

/// Tokens allowed in a ` - <token><n>` multi-part suffix.
pub const SPLIT_TOKENS: &[&str] = &["cd", "disc", "disk", "dvd", "part", "pt"];

/// Prefix of the `{edition-...}` tag.
pub const EDITION_PREFIX: &str = "edition-";

/// Brace tag prefixes accepted on movie files.
pub const MOVIE_TAG_PREFIXES: &[&str] = &[EDITION_PREFIX, "imdb-", "tmdb-"];

/// Brace tag prefixes accepted on episode files.
pub const SHOW_TAG_PREFIXES: &[&str] = &["imdb-", "tmdb-", "tvdb-"];

/// Media extensions scanned when no configuration overrides them.
pub const DEFAULT_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi"];

/// Directory names skipped entirely during traversal.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["Plex Versions"];

/// Earliest release year accepted by default.
pub const DEFAULT_MIN_YEAR: i32 = 1900;

/// Regex alternation over [`SPLIT_TOKENS`], e.g. `cd|disc|...`.
#[must_use]
pub fn split_token_alternation() -> String {
    SPLIT_TOKENS.join("|")
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tests;
