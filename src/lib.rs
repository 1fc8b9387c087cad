//! Arithmetic expression evaluation.
//!
//! Expressions with `+ - * /` and parentheses are converted to postfix with
//! the shunting-yard algorithm and evaluated on an operand stack.

pub mod api;
pub mod calculator;
pub mod config;
pub mod logging;

pub use calculator::{CalcError, calculate};
