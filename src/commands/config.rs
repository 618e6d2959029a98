use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::output::OutputFormat;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config.as_deref()),
        ConfigAction::Show { config, format } => {
            run_config_show(config.as_deref(), *format, cli.no_config)
        }
    }
}

fn run_config_validate(config_path: Option<&Path>) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            match config_path {
                Some(path) => println!("Configuration is valid: {}", path.display()),
                None => println!("Configuration is valid"),
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

/// Parses and validates a configuration file, or the one found by the
/// default search when no path is given.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: Option<&Path>) -> Result<()> {
    load_config(config_path, false).map(|_| ())
}

fn run_config_show(config_path: Option<&Path>, format: OutputFormat, no_config: bool) -> i32 {
    match run_config_show_impl(config_path, format, no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[scanner]\n");
    let _ = writeln!(output, "  extensions = {:?}", config.scanner.extensions);
    let _ = writeln!(output, "  exclude_dirs = {:?}", config.scanner.exclude_dirs);
    if !config.scanner.exclude.is_empty() {
        let _ = writeln!(output, "  exclude = {:?}", config.scanner.exclude);
    }

    output.push_str("\n[naming]\n");
    let _ = writeln!(output, "  grammar = {}", config.naming.grammar);
    let _ = writeln!(output, "  min_year = {}", config.naming.min_year);
    let _ = writeln!(output, "  accumulate = {}", config.naming.accumulate);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
