use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StringRayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown checker type: {0}")]
    UnknownChecker(String),

    #[error("Unknown decider type: {0}")]
    UnknownDecider(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid JSON in {option}: {source}")]
    JsonOption {
        option: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl StringRayError {
    /// Short machine-readable classification of the error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::UnknownChecker(_) => "UnknownChecker",
            Self::UnknownDecider(_) => "UnknownDecider",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonOption { .. } | Self::JsonSerialize(_) => "Json",
        }
    }

    /// The primary subject of the error, without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::UnknownChecker(msg) | Self::UnknownDecider(msg) => {
                msg.clone()
            }
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::InvalidPattern { pattern, .. } => pattern.clone(),
            Self::JsonOption { option, .. } => option.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(format!("{source} ({:?})", source.kind())),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::JsonOption { source, .. } => Some(source.to_string()),
            Self::Config(_)
            | Self::UnknownChecker(_)
            | Self::UnknownDecider(_)
            | Self::Io(_)
            | Self::TomlParse(_)
            | Self::JsonSerialize(_) => None,
        }
    }

    /// A hint for fixing the problem, when one is known.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some(
                    "Check the .stringray.toml file format, or run `stringray init` for a template",
                )
            }
            Self::UnknownChecker(_) => Some("Valid checkers are: grammar, char_count, custom"),
            Self::UnknownDecider(_) => Some("Valid deciders are: threshold, noCritical, custom"),
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check the file permissions"),
                _ => None,
            },
            Self::InvalidPattern { .. } => {
                Some("Check the glob syntax, e.g. \"**/*.{js,ts}\" or \"src/**\"")
            }
            Self::JsonOption { .. } => {
                Some("Options must be a JSON object, e.g. '{\"maxChars\": 80}'")
            }
            Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StringRayError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
