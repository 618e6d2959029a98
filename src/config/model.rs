use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::checker::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS, DEFAULT_MIN_YEAR, NameGrammar};

/// Scanner configuration for media file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Media extensions to check (without the dot, case-insensitive).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names skipped with everything below them (case-insensitive).
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Glob patterns for files or folders to ignore.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            exclude: Vec::new(),
        }
    }
}

impl ScannerConfig {
    /// Extensions lowercased, leading dots removed, duplicates dropped (first wins).
    #[must_use]
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Naming rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    /// How brace tags are handled when matching the core name.
    #[serde(default)]
    pub grammar: NameGrammar,

    /// Earliest accepted release year. The latest is always next year.
    #[serde(default = "default_min_year")]
    pub min_year: i32,

    /// Report every failed post-parse check instead of only the first.
    #[serde(default)]
    pub accumulate: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            grammar: NameGrammar::default(),
            min_year: DEFAULT_MIN_YEAR,
            accumulate: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub naming: NamingConfig,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(ToString::to_string).collect()
}

const fn default_min_year() -> i32 {
    DEFAULT_MIN_YEAR
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
