use std::fs;
use std::path::Path;

use crate::cli::CheckArgs;
use crate::config::{Config, ConfigLoader, FileConfigLoader};

/// Load configuration from `config_path`, or from the default search order
/// when no path is given. `no_config` skips loading entirely.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or
/// validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Command-line flags win over file values.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(grammar) = args.grammar {
        config.naming.grammar = grammar;
    }
    if args.accumulate {
        config.naming.accumulate = true;
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
}

/// Write a report to `output_path`, or to stdout unless `quiet` is set.
///
/// # Errors
/// Returns an error if the file or its parent directories cannot be written.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "report written");
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
