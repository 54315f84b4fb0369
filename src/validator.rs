//! The pipeline: extract fragments, check each one, decide once.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checker::{self, CheckDetail, CheckResult, Checker};
use crate::decider::{self, Decider};
use crate::error::Result;
use crate::extractor::{self, FileInput, Fragment};
use crate::options::Options;

/// A fragment together with its checker verdict. Serialized flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub file: String,
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub content: String,
    pub valid: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<CheckDetail>>,
}

impl ValidationResult {
    #[must_use]
    pub fn new(fragment: Fragment, check: CheckResult) -> Self {
        Self {
            file: fragment.file,
            line: fragment.line,
            start: fragment.start,
            end: fragment.end,
            content: fragment.content,
            valid: check.valid,
            message: check.message,
            details: check.details,
        }
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        checker::is_critical(&self.message, self.details.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub pass: bool,
    pub reason: String,
}

impl ValidationSummary {
    #[must_use]
    pub fn pass(reason: impl Into<String>) -> Self {
        Self {
            pass: true,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            pass: false,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorInput {
    pub files: Vec<FileInput>,
    pub checker: String,
    #[serde(default)]
    pub checker_options: Options,
    pub decider: String,
    #[serde(default)]
    pub decider_options: Options,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorOutput {
    pub results: Vec<ValidationResult>,
    pub summary: ValidationSummary,
}

impl ValidatorOutput {
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.valid).count()
    }

    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.results.len() - self.valid_count()
    }
}

/// Run the whole pipeline over `input.files`.
///
/// # Errors
/// Returns `UnknownChecker` or `UnknownDecider` when a strategy name is not
/// recognized. Nothing else fails: content problems become results.
pub fn validate(input: &ValidatorInput) -> Result<ValidatorOutput> {
    let fragments = extractor::extract(&input.files);
    let checker = checker::create_checker(&input.checker)?;
    let decider = decider::create_decider(&input.decider)?;

    let results: Vec<ValidationResult> = fragments
        .into_iter()
        .map(|fragment| {
            let check = checker.check(&fragment.content, &input.checker_options);
            ValidationResult::new(fragment, check)
        })
        .collect();
    debug!(
        checker = %input.checker,
        results = results.len(),
        "checked fragments"
    );

    let summary = decider.decide(&results, &input.decider_options);
    debug!(decider = %input.decider, pass = summary.pass, reason = %summary.reason, "decided");

    Ok(ValidatorOutput { results, summary })
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
