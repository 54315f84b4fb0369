use crate::options::{self, Options};
use crate::script::format_number;
use crate::validator::{ValidationResult, ValidationSummary};

use super::Decider;

pub const DEFAULT_MIN_VALID_RATIO: f64 = 0.8;

/// Passes when at least `minValidRatio` of the results are valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdDecider;

impl Decider for ThresholdDecider {
    #[allow(clippy::cast_precision_loss)]
    fn decide(&self, results: &[ValidationResult], options: &Options) -> ValidationSummary {
        if results.is_empty() {
            return ValidationSummary::pass("No strings to validate");
        }

        let min_ratio = options::number(options, "minValidRatio", DEFAULT_MIN_VALID_RATIO);
        let total = results.len();
        let valid = results.iter().filter(|r| r.valid).count();
        let ratio = valid as f64 / total as f64;
        // Ties round up: 1/16 is 6.3%, not 6.2%.
        let achieved = (ratio * 1000.0).round() / 10.0;

        if ratio >= min_ratio {
            ValidationSummary::pass(format!("{valid}/{total} strings valid ({achieved:.1}%)"))
        } else {
            ValidationSummary::fail(format!(
                "Only {valid}/{total} strings valid ({achieved:.1}%), required {}%",
                required_percent(min_ratio)
            ))
        }
    }
}

/// `0.8` -> `80`, `0.855` -> `85.5`; float noise past two decimals is dropped.
fn required_percent(ratio: f64) -> String {
    format_number((ratio * 10_000.0).round() / 100.0)
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
