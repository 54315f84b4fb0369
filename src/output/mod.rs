mod error_output;
mod json;
mod markdown;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::validator::ValidatorOutput;

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for rendering a validation run into a report.
pub trait OutputFormatter {
    /// Format the validation output into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, output: &ValidatorOutput) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
