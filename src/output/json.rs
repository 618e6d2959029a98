use serde::Serialize;

use crate::checker::{DiagnosticKind, MediaType, VerificationResult};
use crate::error::Result;

use super::report::ScanReport;
use super::{ReportFormatter, message};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    media_type: MediaType,
    summary: JsonSummary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct JsonSummary {
    valid: usize,
    invalid: usize,
    total: usize,
    correctness: f64,
    qualifier: &'static str,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    status: &'static str,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    #[serde(flatten)]
    kind: &'a DiagnosticKind,
    message: String,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let summary = report.summary();
        let correctness = (summary.correctness() * 100.0).round() / 100.0;

        let output = JsonOutput {
            media_type: report.media_type,
            summary: JsonSummary {
                valid: summary.valid,
                invalid: summary.invalid,
                total: summary.total,
                correctness,
                qualifier: summary.qualifier(),
            },
            results: report.results.iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &VerificationResult) -> FileResult<'_> {
    FileResult {
        path: result.path().display().to_string(),
        status: result.status(),
        diagnostics: result
            .diagnostics()
            .iter()
            .map(|d| JsonDiagnostic {
                kind: &d.kind,
                message: message::render(&d.kind),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
