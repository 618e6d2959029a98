use crate::checker::{MediaType, VerificationResult};

/// Everything a formatter needs to render one scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub media_type: MediaType,
    pub results: Vec<VerificationResult>,
}

impl ScanReport {
    #[must_use]
    pub const fn new(media_type: MediaType, results: Vec<VerificationResult>) -> Self {
        Self {
            media_type,
            results,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_results(&self.results)
    }

    /// Results that failed at least one rule, in traversal order.
    pub fn invalid_results(&self) -> impl Iterator<Item = &VerificationResult> {
        self.results.iter().filter(|r| r.is_invalid())
    }

    #[must_use]
    pub fn has_invalid(&self) -> bool {
        self.results.iter().any(VerificationResult::is_invalid)
    }
}

/// Tallies for the summary block. Extras count as valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
    pub total: usize,
}

impl Summary {
    #[must_use]
    pub fn from_results(results: &[VerificationResult]) -> Self {
        let invalid = results.iter().filter(|r| r.is_invalid()).count();
        Self {
            valid: results.len() - invalid,
            invalid,
            total: results.len(),
        }
    }

    /// Percentage of valid files. An empty scan scores zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn correctness(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.valid as f64 * 100.0 / self.total as f64
    }

    #[must_use]
    pub fn qualifier(&self) -> &'static str {
        qualifier_for(self.correctness())
    }
}

/// Encouragement printed after the correctness percentage.
#[must_use]
pub fn qualifier_for(correctness: f64) -> &'static str {
    match correctness {
        c if c >= 100.0 => "(perfect score!)",
        c if c >= 95.0 => "(excellent!)",
        c if c >= 90.0 => "(great job!)",
        c if c >= 85.0 => "(good effort)",
        _ => "",
    }
}

/// Format a count with `,` between groups of three digits.
#[must_use]
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
