//! Postfix evaluation over an explicit operand stack.

use super::error::EvalError;
use super::token::{Operator, Token, parse_postfix};

/// Evaluate postfix tokens to a single value.
///
/// Number literals that fail to parse are reported as `InvalidNumber`.
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    run(tokens, EvalError::InvalidNumber)
}

/// Evaluate whitespace-separated postfix text, e.g. `3 4 + 2 *`.
///
/// A word that is neither a number nor an operator is reported as
/// `InvalidOperation`, since nothing upstream has classified it.
pub fn evaluate_postfix(input: &str) -> Result<f64, EvalError> {
    run(&parse_postfix(input), EvalError::InvalidOperation)
}

fn run(tokens: &[Token], bad_literal: fn(String) -> EvalError) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(text) => {
                let value = parse_number(text).ok_or_else(|| bad_literal(text.clone()))?;
                stack.push(value);
            }
            Token::Operator(op) => {
                // Right operand was pushed last.
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::InsufficientOperands(*op));
                };
                stack.push(apply(*op, a, b)?);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::InvalidOperation(token.to_string()));
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::MalformedExpression),
    }
}

fn apply(op: Operator, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

/// Parse a literal, rejecting values that overflow to infinity or are NaN.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
