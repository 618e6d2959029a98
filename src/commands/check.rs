use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checker::{MediaType, VerificationResult, Verifier, verifier_for};
use crate::cli::{CheckArgs, Cli};
use crate::config::validate_config_semantics;
use crate::output::{ScanProgress, ScanReport};
use crate::scanner::{DirectoryScanner, FileScanner, MediaFilter};
use crate::{EXIT_FAILURE, EXIT_INVALID_FILES, EXIT_SUCCESS};

use super::context::{apply_cli_overrides, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    let scanner = DirectoryScanner::new(MediaFilter::from_config(&config.scanner)?);
    let files = scanner.scan(&args.folder)?;
    let root = dunce::canonicalize(&args.folder)?;

    let media_type = args
        .media_type
        .unwrap_or_else(|| MediaType::guess(&files));
    tracing::info!(%media_type, files = files.len(), "verifying names");

    let verifier = verifier_for(media_type, &config)?;
    let progress = ScanProgress::new(files.len() as u64, cli.quiet);
    let results = verify_files(verifier.as_ref(), &files, &root, &progress);
    progress.finish();

    let report = ScanReport::new(media_type, results);
    let output = args.format.formatter(cli.color.into()).format(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code_for(&report, args.fail_on_invalid))
}

/// Verify every file in parallel. Results keep the order of `files`.
pub(crate) fn verify_files(
    verifier: &dyn Verifier,
    files: &[PathBuf],
    root: &Path,
    progress: &ScanProgress,
) -> Vec<VerificationResult> {
    files
        .par_iter()
        .map(|path| {
            let result = verifier.verify(path, root);
            tracing::debug!(path = %path.display(), status = result.status(), "verified");
            progress.inc();
            result
        })
        .collect()
}

pub(crate) fn exit_code_for(report: &ScanReport, fail_on_invalid: bool) -> i32 {
    if fail_on_invalid && report.has_invalid() {
        EXIT_INVALID_FILES
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
