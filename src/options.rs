//! Strategy options: an opaque JSON object handed to the selected checker or
//! decider. Each strategy reads the keys it knows and ignores the rest.

use serde_json::Value as Json;

use crate::error::{Result, StringRayError};

pub type Options = serde_json::Map<String, Json>;

/// Numeric option, falling back to `default` when absent or not a number.
#[must_use]
pub fn number(options: &Options, key: &str, default: f64) -> f64 {
    options.get(key).and_then(Json::as_f64).unwrap_or(default)
}

/// String option; `None` when absent or not a string.
#[must_use]
pub fn string<'a>(options: &'a Options, key: &str) -> Option<&'a str> {
    options.get(key).and_then(Json::as_str)
}

/// Parse a JSON object given on the command line for `option`.
///
/// # Errors
/// Returns `JsonOption` when `json` is not a valid JSON object.
pub fn parse(option: &str, json: &str) -> Result<Options> {
    serde_json::from_str(json).map_err(|source| StringRayError::JsonOption {
        option: option.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
