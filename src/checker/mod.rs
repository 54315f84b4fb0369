mod char_count;
mod custom;
mod grammar;
mod result;

pub use char_count::CharCountChecker;
pub use custom::CustomChecker;
pub use grammar::GrammarChecker;
pub use result::{CRITICAL_MARKER, CheckDetail, CheckResult, Severity};

pub(crate) use result::is_critical;

use crate::error::{Result, StringRayError};
use crate::options::Options;

pub trait Checker: Send + Sync {
    /// Judge one fragment's text.
    ///
    /// Never fails: problems with the content or the options become an
    /// invalid result.
    fn check(&self, content: &str, options: &Options) -> CheckResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerKind {
    Grammar,
    CharCount,
    Custom,
}

impl CheckerKind {
    pub const ALL: [Self; 3] = [Self::Grammar, Self::CharCount, Self::Custom];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::CharCount => "char_count",
            Self::Custom => "custom",
        }
    }
}

impl std::str::FromStr for CheckerKind {
    type Err = StringRayError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| StringRayError::UnknownChecker(s.to_string()))
    }
}

/// The closed set of checkers.
pub enum AnyChecker {
    Grammar(GrammarChecker),
    CharCount(CharCountChecker),
    Custom(CustomChecker),
}

impl AnyChecker {
    #[must_use]
    pub fn new(kind: CheckerKind) -> Self {
        match kind {
            CheckerKind::Grammar => Self::Grammar(GrammarChecker::new()),
            CheckerKind::CharCount => Self::CharCount(CharCountChecker),
            CheckerKind::Custom => Self::Custom(CustomChecker),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CheckerKind {
        match self {
            Self::Grammar(_) => CheckerKind::Grammar,
            Self::CharCount(_) => CheckerKind::CharCount,
            Self::Custom(_) => CheckerKind::Custom,
        }
    }
}

impl Checker for AnyChecker {
    fn check(&self, content: &str, options: &Options) -> CheckResult {
        match self {
            Self::Grammar(checker) => checker.check(content, options),
            Self::CharCount(checker) => checker.check(content, options),
            Self::Custom(checker) => checker.check(content, options),
        }
    }
}

/// Look up a checker by its configured name.
///
/// # Errors
/// Returns `UnknownChecker` for names outside the closed set.
pub fn create_checker(name: &str) -> Result<AnyChecker> {
    Ok(AnyChecker::new(name.parse()?))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
