use serde::{Deserialize, Serialize};

use crate::checker::CheckerKind;
use crate::decider::DeciderKind;
use crate::error::Result;
use crate::options::Options;

/// Files scanned when neither the config nor the CLI says otherwise.
pub const DEFAULT_FILES: &str = "**/*.{js,ts,md,json}";

/// A strategy selection: its name plus the options handed to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyConfig {
    pub kind: String,

    #[serde(default, skip_serializing_if = "Options::is_empty")]
    pub options: Options,
}

impl StrategyConfig {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            options: Options::new(),
        }
    }

    fn default_checker() -> Self {
        Self::new(CheckerKind::Grammar.name())
    }

    fn default_decider() -> Self {
        Self::new(DeciderKind::Threshold.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Include globs, relative to each scanned root.
    #[serde(default = "default_files")]
    pub files: Vec<String>,

    /// Exclude globs, applied after `files`.
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default = "StrategyConfig::default_checker")]
    pub checker: StrategyConfig,

    #[serde(default = "StrategyConfig::default_decider")]
    pub decider: StrategyConfig,
}

fn default_files() -> Vec<String> {
    vec![DEFAULT_FILES.to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: default_files(),
            exclude: Vec::new(),
            checker: StrategyConfig::default_checker(),
            decider: StrategyConfig::default_decider(),
        }
    }
}

impl Config {
    /// Reject strategy names outside the closed sets.
    ///
    /// # Errors
    /// Returns `UnknownChecker` or `UnknownDecider`.
    pub fn validate(&self) -> Result<()> {
        self.checker.kind.parse::<CheckerKind>()?;
        self.decider.kind.parse::<DeciderKind>()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
