use serde::{Deserialize, Serialize};

/// Marker that makes a message count as critical for the `noCritical` decider.
pub const CRITICAL_MARKER: &str = "CRITICAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// One finding behind a check verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDetail {
    pub severity: Severity,
    pub rule: String,
    pub message: String,
}

impl CheckDetail {
    #[must_use]
    pub fn new(severity: Severity, rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// Verdict of a checker on one fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub valid: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<CheckDetail>>,
}

impl CheckResult {
    #[must_use]
    pub fn passed() -> Self {
        Self {
            valid: true,
            message: "OK".to_string(),
            details: None,
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<CheckDetail>) -> Self {
        self.details = Some(details);
        self
    }

    /// Critical when the message carries the marker or any detail is an error,
    /// regardless of `valid`.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        is_critical(&self.message, self.details.as_deref())
    }
}

pub(crate) fn is_critical(message: &str, details: Option<&[CheckDetail]>) -> bool {
    message.contains(CRITICAL_MARKER)
        || details.is_some_and(|d| d.iter().any(|detail| detail.severity == Severity::Error))
}
