//! Heuristic extraction of user-facing text from file contents.
//!
//! This is not a tokenizer. Each line is scanned for quoted literals without
//! knowing whether the quote sits in a comment, in another literal, or in a
//! fenced code block. Markdown-like files additionally contribute each prose
//! line as a fragment.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A file handed to the pipeline: an opaque path and its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInput {
    pub path: String,
    pub content: String,
}

impl FileInput {
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A piece of extracted text with its location.
///
/// `line` is 1-based. `start` and `end` are 0-based character columns within
/// the line; for literals they cover the delimiters, so `end > start` always.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub file: String,
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub content: String,
}

const FENCE: &str = "```";

pub struct StringExtractor {
    /// Double, single, backtick; scanned in this order.
    literal_patterns: [Regex; 3],
}

impl Default for StringExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl StringExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            literal_patterns: [
                Regex::new(r#""(?:[^"\\]|\\.)*""#).expect("Invalid regex"),
                Regex::new(r"'(?:[^'\\]|\\.)*'").expect("Invalid regex"),
                Regex::new(r"`(?:[^`\\]|\\.)*`").expect("Invalid regex"),
            ],
        }
    }

    /// Extract fragments from every file, in file order, then line order.
    #[must_use]
    pub fn extract(&self, files: &[FileInput]) -> Vec<Fragment> {
        let fragments: Vec<Fragment> = files
            .iter()
            .flat_map(|file| self.extract_from_file(&file.path, &file.content))
            .collect();
        debug!(
            files = files.len(),
            fragments = fragments.len(),
            "extracted fragments"
        );
        fragments
    }

    fn extract_from_file(&self, path: &str, content: &str) -> Vec<Fragment> {
        if content.is_empty() {
            return Vec::new();
        }

        let markdown = is_markdown_path(path);
        let mut fragments = Vec::new();

        for (index, line) in content.split('\n').enumerate() {
            let line_number = index + 1;
            if markdown && let Some(fragment) = markdown_fragment(path, line, line_number) {
                fragments.push(fragment);
            }
            self.push_literals(path, line, line_number, &mut fragments);
        }

        fragments
    }

    fn push_literals(&self, path: &str, line: &str, line_number: usize, out: &mut Vec<Fragment>) {
        for pattern in &self.literal_patterns {
            for m in pattern.find_iter(line) {
                let literal = m.as_str();
                // Every pattern starts and ends with a one-byte ASCII delimiter.
                let inner = &literal[1..literal.len() - 1];
                if inner.is_empty() {
                    continue;
                }
                let start = line[..m.start()].chars().count();
                out.push(Fragment {
                    file: path.to_string(),
                    line: line_number,
                    start,
                    end: start + literal.chars().count(),
                    content: inner.to_string(),
                });
            }
        }
    }
}

/// Extract fragments with a freshly built extractor.
#[must_use]
pub fn extract(files: &[FileInput]) -> Vec<Fragment> {
    StringExtractor::new().extract(files)
}

/// Markdown heuristic: `.md`/`.mdx` extension or `README` anywhere in the path.
#[must_use]
pub fn is_markdown_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    lower.ends_with(".md") || lower.ends_with(".mdx") || lower.contains("readme")
}

/// One prose fragment per non-blank line that is neither a heading nor a fence line.
fn markdown_fragment(path: &str, line: &str, line_number: usize) -> Option<Fragment> {
    let trimmed = line.trim();
    if trimmed.is_empty() || line.starts_with('#') || line.starts_with(FENCE) {
        return None;
    }
    Some(Fragment {
        file: path.to_string(),
        line: line_number,
        start: 0,
        end: line.chars().count(),
        content: trimmed.to_string(),
    })
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
