use crate::options::{self, Options};

use super::{CheckResult, Checker};

pub const DEFAULT_MAX_CHARS: f64 = 100.0;

/// Fails fragments longer than `maxChars` characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCountChecker;

impl Checker for CharCountChecker {
    #[allow(clippy::cast_precision_loss)]
    fn check(&self, content: &str, options: &Options) -> CheckResult {
        let max = options::number(options, "maxChars", DEFAULT_MAX_CHARS);
        let len = content.chars().count();

        if len as f64 > max {
            CheckResult::failed(format!(
                "Too long ({len} > {})",
                crate::script::format_number(max)
            ))
        } else {
            CheckResult::passed()
        }
    }
}

#[cfg(test)]
#[path = "char_count_tests.rs"]
mod tests;
