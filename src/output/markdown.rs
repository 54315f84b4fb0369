//! Pull-request comment rendering.

use std::fmt::Write;

use indexmap::IndexMap;

use crate::error::Result;
use crate::validator::{ValidationResult, ValidatorOutput};

use super::OutputFormatter;

pub const MAX_FILES: usize = 10;
pub const MAX_ISSUES_PER_FILE: usize = 5;
pub const MAX_CONTENT_LENGTH: usize = 50;

const ELLIPSIS: &str = "...";

pub struct MarkdownFormatter;

/// Keep at most `max` characters, the last three being `...` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(ELLIPSIS.len())).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Invalid results grouped by file, files in first-seen order.
fn group_by_file(results: &[ValidationResult]) -> IndexMap<&str, Vec<&ValidationResult>> {
    let mut grouped: IndexMap<&str, Vec<&ValidationResult>> = IndexMap::new();
    for result in results.iter().filter(|r| !r.valid) {
        grouped.entry(result.file.as_str()).or_default().push(result);
    }
    grouped
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, output: &ValidatorOutput) -> Result<String> {
        let summary = &output.summary;
        let (icon, status) = if summary.pass {
            ("✅", "Passed")
        } else {
            ("❌", "Failed")
        };

        let mut comment = String::from("## 🌊 StringRay Results\n\n");
        writeln!(comment, "{icon} **{status}:** {}\n", summary.reason).ok();

        let grouped = group_by_file(&output.results);
        if grouped.is_empty() {
            comment.push_str("All strings passed validation.\n");
            return Ok(comment);
        }

        comment.push_str("### Issues Found\n\n");
        for (file, results) in grouped.iter().take(MAX_FILES) {
            writeln!(comment, "#### `{file}`\n").ok();
            for result in results.iter().take(MAX_ISSUES_PER_FILE) {
                let content = truncate(&result.content, MAX_CONTENT_LENGTH);
                writeln!(comment, "- **Line {}:** `{content}`", result.line).ok();
                writeln!(comment, "  - {}", result.message).ok();
            }
            if results.len() > MAX_ISSUES_PER_FILE {
                writeln!(
                    comment,
                    "- *...and {} more issue(s) in this file*",
                    results.len() - MAX_ISSUES_PER_FILE
                )
                .ok();
            }
            comment.push('\n');
        }
        if grouped.len() > MAX_FILES {
            writeln!(
                comment,
                "\n*...and {} more file(s)*",
                grouped.len() - MAX_FILES
            )
            .ok();
        }

        comment.push_str("---\n*🌊 Posted by StringRay*");
        Ok(comment)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
