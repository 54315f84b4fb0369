use crate::options::Options;
use crate::validator::{ValidationResult, ValidationSummary};

use super::Decider;

/// Fails when any result is critical: its message carries `CRITICAL` or one
/// of its details is an error. Validity is not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCriticalDecider;

impl Decider for NoCriticalDecider {
    fn decide(&self, results: &[ValidationResult], _options: &Options) -> ValidationSummary {
        match results.iter().filter(|r| r.is_critical()).count() {
            0 => ValidationSummary::pass("No critical issues found"),
            n => ValidationSummary::fail(format!("Found {n} critical issue(s)")),
        }
    }
}

#[cfg(test)]
#[path = "no_critical_tests.rs"]
mod tests;
