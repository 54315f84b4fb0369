use serde::Serialize;

use crate::error::Result;
use crate::validator::{ValidationResult, ValidationSummary, ValidatorOutput};

use super::OutputFormatter;

/// The action's output shape: `results`, `summary`, and `pass` repeated at
/// the top level for easy scripting.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: &'a [ValidationResult],
    summary: &'a ValidationSummary,
    pass: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, output: &ValidatorOutput) -> Result<String> {
        let report = JsonOutput {
            results: &output.results,
            summary: &output.summary,
            pass: output.summary.pass,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
