use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result, ShelfGuardError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

/// Writes a commented configuration file with the default settings.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ShelfGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# shelf-guard configuration file
# Plex naming guides:
#   https://support.plex.tv/articles/naming-and-organizing-your-movie-files/
#   https://support.plex.tv/articles/naming-and-organizing-your-tv-show-files/

[scanner]
# Media file extensions to check (case-insensitive)
extensions = ["mkv", "mp4", "avi"]

# Folder names skipped together with everything below them (case-insensitive)
exclude_dirs = ["Plex Versions"]

# Glob patterns for files or folders to ignore
# exclude = ["**/@eaDir", "**/*.sample.mkv"]

[naming]
# "stripped": remove every {tag} and [note] before matching "Title (YYYY)"
# "embedded": {imdb-...} and {edition-...} must follow the year, in that order
grammar = "stripped"

# Earliest accepted release year (the latest is always next year)
min_year = 1900

# Report every failed check per file instead of only the first
accumulate = false
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
