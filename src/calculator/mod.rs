//! Calculator core.
//!
//! This module provides functionality to:
//! - Convert infix expressions to postfix tokens (shunting-yard)
//! - Evaluate postfix tokens on an operand stack
//! - Format results for display

mod conversion;
mod error;
mod evaluation;
mod format;
mod result;
mod token;

pub use conversion::convert;
pub use error::{CalcError, EvalError, ParseError};
pub use evaluation::{evaluate, evaluate_postfix};
pub use format::{format_display, format_result};
pub use result::{CalcResult, evaluate_expression};
pub use token::{Operator, Token, format_postfix, parse_postfix};

/// Calculate the value of an infix expression.
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    let tokens = convert(expression)?;
    Ok(evaluate(&tokens)?)
}
