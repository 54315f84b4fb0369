use tracing::debug;

use crate::options::{self, Options};
use crate::script::{self, Value};

use super::{CheckDetail, CheckResult, Checker, Severity};

/// Runs the `logic` option as a script with `content` bound to the fragment.
///
/// A boolean result is the verdict; a record may carry `valid`, `message`
/// and `details`, and a list is read as a record with no fields. Any failure
/// inside the script becomes an invalid result.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomChecker;

impl Checker for CustomChecker {
    fn check(&self, content: &str, options: &Options) -> CheckResult {
        let Some(logic) = options::string(options, "logic") else {
            return CheckResult::failed("No custom logic provided");
        };

        match script::evaluate(logic, &[("content", Value::from(content))]) {
            Ok(value) => interpret(&value),
            Err(e) => {
                debug!(error = %e, "custom checker logic failed");
                CheckResult::failed(format!("Custom logic error: {e}"))
            }
        }
    }
}

fn interpret(value: &Value) -> CheckResult {
    match value {
        Value::Bool(true) => CheckResult::passed(),
        Value::Bool(false) => CheckResult::failed("Custom check failed"),
        // Lists have no fields and fall back to every default.
        Value::Record(_) | Value::List(_) => {
            let valid = value.get("valid").is_some_and(Value::is_truthy);
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Custom check completed");
            let result = CheckResult {
                valid,
                message: message.to_string(),
                details: None,
            };
            match value.get("details") {
                Some(Value::List(items)) => {
                    result.with_details(items.iter().filter_map(detail).collect())
                }
                _ => result,
            }
        }
        _ => CheckResult::failed("Invalid custom logic result"),
    }
}

/// Entries without a recognized `severity` are dropped.
fn detail(item: &Value) -> Option<CheckDetail> {
    let severity = Severity::parse(item.get("severity")?.as_str()?)?;
    let rule = item.get("rule").and_then(Value::as_str).unwrap_or("custom");
    let message = item.get("message").and_then(Value::as_str).unwrap_or_default();
    Some(CheckDetail::new(severity, rule, message))
}

#[cfg(test)]
#[path = "custom_tests.rs"]
mod tests;
