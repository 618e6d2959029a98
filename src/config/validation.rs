//! Configuration semantic validation.
//!
//! Validates that configuration values are semantically correct after parsing.

use globset::Glob;

use crate::checker::{MovieVerifier, NameGrammar};
use crate::config::Config;
use crate::{Result, ShelfGuardError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if no extension is configured, `min_year` is not a
/// four-digit year, a glob pattern is invalid, or the naming pattern does not
/// compile for the configured extensions.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scanner_section(config)?;
    validate_naming_section(config)?;
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.normalized_extensions().is_empty() {
        return Err(ShelfGuardError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }

    for (i, dir) in config.scanner.exclude_dirs.iter().enumerate() {
        if dir.trim().is_empty() {
            return Err(ShelfGuardError::Config(format!(
                "scanner.exclude_dirs[{i}] cannot be empty"
            )));
        }
    }

    for pattern in &config.scanner.exclude {
        Glob::new(pattern).map_err(|source| ShelfGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    Ok(())
}

fn validate_naming_section(config: &Config) -> Result<()> {
    if !(1000..=9999).contains(&config.naming.min_year) {
        return Err(ShelfGuardError::Config(format!(
            "naming.min_year must be a four-digit year, got {}",
            config.naming.min_year
        )));
    }

    if config.naming.grammar == NameGrammar::Embedded {
        MovieVerifier::new(
            NameGrammar::Embedded,
            &config.scanner.normalized_extensions(),
        )?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
