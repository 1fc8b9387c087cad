//! Presentation wrapper around a calculation.

use super::calculate;
use super::format::{format_display, format_result};

/// Outcome of one calculation, with the value already rendered as text.
///
/// The command line prints either `display_result` or `plain_result`
/// depending on configuration.
#[derive(Clone, Debug)]
pub enum CalcResult {
    Success {
        /// Input with surrounding whitespace trimmed.
        expression: String,
        value: f64,
        /// `format_display` output, e.g. `12,340`.
        display_result: String,
        /// `format_result` output, e.g. `12340`.
        plain_result: String,
    },
    Error {
        expression: String,
        /// `CalcError` message, e.g. `division by zero`.
        message: String,
    },
}

impl CalcResult {
    /// The trimmed input this result belongs to.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Separated value on success, error message otherwise.
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Unseparated value; `None` for errors.
    pub fn plain(&self) -> Option<&str> {
        match self {
            Self::Success { plain_result, .. } => Some(plain_result),
            Self::Error { .. } => None,
        }
    }
}

/// Calculate `input` and render the value both ways.
pub fn evaluate_expression(input: &str) -> CalcResult {
    let expression = input.trim().to_string();

    match calculate(&expression) {
        Ok(value) => CalcResult::Success {
            display_result: format_display(value),
            plain_result: format_result(value),
            expression,
            value,
        },
        Err(err) => CalcResult::Error {
            expression,
            message: err.to_string(),
        },
    }
}
