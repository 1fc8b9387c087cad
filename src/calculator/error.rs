//! Error types for conversion and evaluation.

use thiserror::Error;

use super::token::Operator;

/// Failure while converting infix text to postfix tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyExpression,

    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error("invalid character: {0}")]
    InvalidCharacter(char),
}

/// Failure while evaluating postfix tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("not enough operands for operation: {0}")]
    InsufficientOperands(Operator),

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid expression")]
    MalformedExpression,
}

/// Any failure of a full calculation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("empty expression")]
    EmptyExpression,

    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error("invalid character: {0}")]
    InvalidCharacter(char),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("not enough operands for operation: {0}")]
    InsufficientOperands(Operator),

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid expression")]
    MalformedExpression,
}

impl From<ParseError> for CalcError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::EmptyExpression => Self::EmptyExpression,
            ParseError::MismatchedParentheses => Self::MismatchedParentheses,
            ParseError::InvalidCharacter(ch) => Self::InvalidCharacter(ch),
        }
    }
}

impl From<EvalError> for CalcError {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::InvalidNumber(text) => Self::InvalidNumber(text),
            EvalError::InsufficientOperands(op) => Self::InsufficientOperands(op),
            EvalError::DivisionByZero => Self::DivisionByZero,
            EvalError::InvalidOperation(text) => Self::InvalidOperation(text),
            EvalError::MalformedExpression => Self::MalformedExpression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CalcError::InvalidCharacter('&').to_string(), "invalid character: &");
        assert_eq!(
            CalcError::InsufficientOperands(Operator::Add).to_string(),
            "not enough operands for operation: +"
        );
    }

    #[test]
    fn test_stage_errors_keep_their_message() {
        let parse = ParseError::MismatchedParentheses;
        assert_eq!(CalcError::from(parse.clone()).to_string(), parse.to_string());

        let eval = EvalError::InvalidNumber("1.2.3".to_string());
        assert_eq!(CalcError::from(eval.clone()).to_string(), eval.to_string());
    }
}
