pub mod checker;
pub mod cli;
pub mod config;
pub mod decider;
pub mod error;
pub mod extractor;
pub mod options;
pub mod output;
pub mod scanner;
pub mod script;
pub mod validator;

pub use checker::{AnyChecker, CheckerKind, create_checker};
pub use decider::{AnyDecider, DeciderKind, create_decider};
pub use error::{Result, StringRayError};
pub use extractor::{FileInput, Fragment, extract};
pub use options::Options;
pub use validator::{
    ValidationResult, ValidationSummary, ValidatorInput, ValidatorOutput, validate,
};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
