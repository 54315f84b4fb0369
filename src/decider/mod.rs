mod custom;
mod no_critical;
mod threshold;

pub use custom::CustomDecider;
pub use no_critical::NoCriticalDecider;
pub use threshold::ThresholdDecider;

use crate::error::{Result, StringRayError};
use crate::options::Options;
use crate::validator::{ValidationResult, ValidationSummary};

pub trait Decider: Send + Sync {
    /// Reduce all per-fragment results to one verdict.
    fn decide(&self, results: &[ValidationResult], options: &Options) -> ValidationSummary;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeciderKind {
    Threshold,
    NoCritical,
    Custom,
}

impl DeciderKind {
    pub const ALL: [Self; 3] = [Self::Threshold, Self::NoCritical, Self::Custom];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::NoCritical => "noCritical",
            Self::Custom => "custom",
        }
    }
}

impl std::str::FromStr for DeciderKind {
    type Err = StringRayError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| StringRayError::UnknownDecider(s.to_string()))
    }
}

/// The closed set of deciders.
#[derive(Debug, Clone, Copy)]
pub enum AnyDecider {
    Threshold(ThresholdDecider),
    NoCritical(NoCriticalDecider),
    Custom(CustomDecider),
}

impl AnyDecider {
    #[must_use]
    pub const fn new(kind: DeciderKind) -> Self {
        match kind {
            DeciderKind::Threshold => Self::Threshold(ThresholdDecider),
            DeciderKind::NoCritical => Self::NoCritical(NoCriticalDecider),
            DeciderKind::Custom => Self::Custom(CustomDecider),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DeciderKind {
        match self {
            Self::Threshold(_) => DeciderKind::Threshold,
            Self::NoCritical(_) => DeciderKind::NoCritical,
            Self::Custom(_) => DeciderKind::Custom,
        }
    }
}

impl Decider for AnyDecider {
    fn decide(&self, results: &[ValidationResult], options: &Options) -> ValidationSummary {
        match self {
            Self::Threshold(decider) => decider.decide(results, options),
            Self::NoCritical(decider) => decider.decide(results, options),
            Self::Custom(decider) => decider.decide(results, options),
        }
    }
}

/// Look up a decider by its configured name.
///
/// # Errors
/// Returns `UnknownDecider` for names outside the closed set.
pub fn create_decider(name: &str) -> Result<AnyDecider> {
    Ok(AnyDecider::new(name.parse()?))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
