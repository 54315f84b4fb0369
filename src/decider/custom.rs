use tracing::debug;

use crate::options::{self, Options};
use crate::script::{self, Value};
use crate::validator::{ValidationResult, ValidationSummary};

use super::Decider;

/// Runs the `logic` option as a script with `results` bound to every result.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomDecider;

impl Decider for CustomDecider {
    fn decide(&self, results: &[ValidationResult], options: &Options) -> ValidationSummary {
        let Some(logic) = options::string(options, "logic") else {
            return ValidationSummary::fail("No custom logic provided");
        };

        let bound = match serde_json::to_value(results) {
            Ok(json) => Value::from(json),
            Err(e) => return ValidationSummary::fail(format!("Custom logic error: {e}")),
        };

        match script::evaluate(logic, &[("results", bound)]) {
            Ok(value) => interpret(&value),
            Err(e) => {
                debug!(error = %e, "custom decider logic failed");
                ValidationSummary::fail(format!("Custom logic error: {e}"))
            }
        }
    }
}

fn interpret(value: &Value) -> ValidationSummary {
    match value {
        Value::Bool(true) => ValidationSummary::pass("Custom check passed"),
        Value::Bool(false) => ValidationSummary::fail("Custom check failed"),
        Value::Record(_) | Value::List(_) => ValidationSummary {
            pass: value.get("pass").is_some_and(Value::is_truthy),
            reason: value
                .get("reason")
                .and_then(Value::as_str)
                .unwrap_or("Custom decision completed")
                .to_string(),
        },
        _ => ValidationSummary::fail("Invalid custom logic result"),
    }
}

#[cfg(test)]
#[path = "custom_tests.rs"]
mod tests;
