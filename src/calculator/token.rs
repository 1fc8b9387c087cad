//! Tokens shared by the converter and the evaluator.

use std::fmt;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Map a character to an operator, if it is one.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The source symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Precedence class. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single lexical unit of an expression.
///
/// Number literals keep their source text. They are only parsed to `f64`
/// during evaluation, so a malformed literal like `1.2.3` survives conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Classify one word of textual postfix input.
    ///
    /// Anything that is not an operator or a parenthesis is taken as a number
    /// literal; the evaluator decides whether it actually parses.
    pub fn parse(word: &str) -> Self {
        let mut chars = word.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operator::from_char(ch) {
                return Self::Operator(op);
            }
            match ch {
                '(' => return Self::LeftParen,
                ')' => return Self::RightParen,
                _ => {}
            }
        }
        Self::Number(word.to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Split whitespace-separated postfix text into tokens.
pub fn parse_postfix(input: &str) -> Vec<Token> {
    input.split_whitespace().map(Token::parse).collect()
}

/// Render tokens as space-separated text, e.g. `2 3 4 * +`.
pub fn format_postfix(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
