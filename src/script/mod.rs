//! Bounded evaluation of user-supplied logic.
//!
//! The `custom` checker and decider accept a one-line expression written in a
//! small JavaScript-like language, for example
//! `results.filter(r => r.valid).length >= 2` or
//! `({ pass: content.length < 80, reason: "length" })`.
//!
//! Expressions run in a sandbox: the only names in scope are the bindings the
//! caller supplies (plus arrow-function parameters). There are no globals, no
//! assignment and no I/O. Parsing caps nesting depth and evaluation caps the
//! number of steps, so every evaluation terminates with a value or a
//! [`ScriptError`].

mod eval;
mod lexer;
mod parser;
mod value;

pub use eval::DEFAULT_STEP_BUDGET;
pub use parser::{Expr, MAX_DEPTH};
pub use value::Value;

pub(crate) use value::format_number;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("SyntaxError: {message} (at offset {offset})")]
    Syntax { offset: usize, message: String },

    #[error("ReferenceError: {0} is not defined")]
    Reference(String),

    #[error("TypeError: {0}")]
    Type(String),

    #[error("LimitError: evaluation exceeded {0} steps")]
    BudgetExceeded(usize),

    #[error("LimitError: expression nesting exceeds {0} levels")]
    TooDeep(usize),
}

/// A parsed expression, ready to be evaluated against bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    expr: Expr,
    step_budget: usize,
}

impl Script {
    /// Parse `source` as a single expression.
    ///
    /// # Errors
    /// Returns a syntax or nesting error.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        Ok(Self {
            expr: parser::parse(source)?,
            step_budget: DEFAULT_STEP_BUDGET,
        })
    }

    #[must_use]
    pub const fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = budget;
        self
    }

    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Evaluate with `bindings` as the only names in scope.
    ///
    /// # Errors
    /// Returns reference, type or budget errors raised during evaluation.
    pub fn evaluate(&self, bindings: &[(&str, Value)]) -> Result<Value, ScriptError> {
        eval::Evaluator::new(bindings, self.step_budget).eval(&self.expr)
    }
}

/// Parse and evaluate `source` in one go.
///
/// # Errors
/// Returns any parse or evaluation error.
pub fn evaluate(source: &str, bindings: &[(&str, Value)]) -> Result<Value, ScriptError> {
    Script::parse(source)?.evaluate(bindings)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
