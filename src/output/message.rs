use crate::checker::DiagnosticKind;

/// Render a diagnostic as the one-line message shown under the file path.
#[must_use]
pub fn render(kind: &DiagnosticKind) -> String {
    match kind {
        DiagnosticKind::MalformedPath { reason } => format!("Cannot check path: {reason}"),
        DiagnosticKind::InvalidTag {
            tag,
            allowed_prefixes,
        } => format!(
            "Invalid block '{}'. Must be {}",
            tag.trim_start_matches('{').trim_end_matches('}'),
            join_alternatives(allowed_prefixes)
        ),
        DiagnosticKind::StructuralMismatch { .. } => {
            "Invalid naming format. Expected 'Movie Name (YYYY){optional split}'".to_string()
        }
        DiagnosticKind::YearOutOfRange { value, min, max } => {
            format!("Invalid year '{value}'. Must be between {min} and {max}")
        }
        DiagnosticKind::FolderMismatch { actual, expected } => {
            format!("Folder name '{actual}' does not match filename '{expected}'")
        }
        DiagnosticKind::MisplacedSplitSuffix { suffix } => {
            format!("Split suffix '{suffix}' is only allowed inside a movie folder")
        }
        DiagnosticKind::MissingEpisodeMarker { .. } => {
            "Invalid episode format. Expected 'Show Name - SxxEyy'".to_string()
        }
    }
}

/// `a, b, or c` style list.
fn join_alternatives(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
