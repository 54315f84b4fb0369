//! Error reporting on stderr.
//!
//! Format: `✖ {error_type}: {message}`, then an optional `× {detail}` line and
//! an optional `help: {suggestion}` line.

use std::io::{IsTerminal, Write};

use crate::error::StringRayError;

use super::{ColorMode, ansi};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var("NO_COLOR").is_err() && std::io::stderr().is_terminal()
            }
        };
        Self { use_colors }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn print(&self, error: &StringRayError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    /// Failures to write are dropped: there is nowhere left to report them.
    pub fn write_error<W: Write>(&self, w: &mut W, error: &StringRayError) {
        let error_type = error.error_type();
        let message = error.message();
        if self.use_colors {
            writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            )
            .ok();
        } else {
            writeln!(w, "✖ {error_type}: {message}").ok();
        }

        if let Some(detail) = error.detail() {
            if self.use_colors {
                writeln!(w, "  {}× {detail}{}", ansi::DIM, ansi::RESET).ok();
            } else {
                writeln!(w, "  × {detail}").ok();
            }
        }

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                writeln!(w, "  {}help:{} {suggestion}", ansi::CYAN, ansi::RESET).ok();
            } else {
                writeln!(w, "  help: {suggestion}").ok();
            }
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
