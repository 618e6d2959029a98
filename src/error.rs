use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Folder '{0}' does not exist")]
    RootNotFound(PathBuf),

    #[error("'{0}' is not a folder")]
    RootNotDirectory(PathBuf),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error scanning files: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid naming pattern: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShelfGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
