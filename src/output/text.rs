use std::io::Write;

use crate::error::Result;
use crate::validator::{ValidationResult, ValidatorOutput};

use super::{OutputFormatter, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    /// `✗ file:line:col "content"` followed by the message and any details.
    fn format_result(&self, result: &ValidationResult, output: &mut Vec<u8>) {
        let icon = if result.valid {
            self.colorize("✓", ansi::GREEN)
        } else {
            self.colorize("✗", ansi::RED)
        };
        writeln!(
            output,
            "{icon} {}:{}:{} \"{}\"",
            result.file,
            result.line,
            result.start + 1,
            result.content
        )
        .ok();

        if result.valid {
            return;
        }
        match &result.details {
            Some(details) if !details.is_empty() => {
                for detail in details {
                    let severity = self.colorize(detail.severity.as_str(), ansi::YELLOW);
                    writeln!(output, "   {severity} [{}] {}", detail.rule, detail.message).ok();
                }
            }
            _ => {
                writeln!(output, "   {}", result.message).ok();
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ValidatorOutput) -> Result<String> {
        let mut output = Vec::new();

        for result in &report.results {
            if !result.valid || self.verbose >= 1 {
                self.format_result(result, &mut output);
            }
        }
        if !output.is_empty() {
            writeln!(output).ok();
        }

        let banner = if report.summary.pass {
            self.colorize("PASSED", ansi::GREEN)
        } else {
            self.colorize("FAILED", ansi::RED)
        };
        writeln!(output, "{banner}: {}", report.summary.reason).ok();

        let valid = report.valid_count();
        let invalid = report.invalid_count();
        writeln!(
            output,
            "Summary: {} strings checked, {} valid, {} invalid",
            report.results.len(),
            self.colorize(&valid.to_string(), ansi::GREEN),
            self.colorize(&invalid.to_string(), ansi::RED)
        )
        .ok();

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
