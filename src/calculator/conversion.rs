//! Infix to postfix conversion (shunting-yard).
//!
//! The converter only checks bracket structure and characters. Operand
//! arity (`5+`) and literal validity (`1.2.3`) are left to the evaluator.

use super::error::ParseError;
use super::token::{Operator, Token};

/// Convert an infix expression into postfix tokens.
pub fn convert(expression: &str) -> Result<Vec<Token>, ParseError> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut output: Vec<Token> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();
    let mut literal = String::new();

    for ch in stripped.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            literal.push(ch);
            continue;
        }

        flush_literal(&mut literal, &mut output);

        match ch {
            '(' => operators.push(Token::LeftParen),
            ')' => close_paren(&mut operators, &mut output)?,
            _ => match Operator::from_char(ch) {
                Some(op) => push_operator(op, &mut operators, &mut output),
                None => return Err(ParseError::InvalidCharacter(ch)),
            },
        }
    }

    flush_literal(&mut literal, &mut output);

    while let Some(top) = operators.pop() {
        if top == Token::LeftParen {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}

fn flush_literal(literal: &mut String, output: &mut Vec<Token>) {
    if !literal.is_empty() {
        output.push(Token::Number(std::mem::take(literal)));
    }
}

/// Pop operators until the matching `(`, which is discarded.
fn close_paren(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<(), ParseError> {
    while let Some(top) = operators.pop() {
        if top == Token::LeftParen {
            return Ok(());
        }
        output.push(top);
    }
    Err(ParseError::MismatchedParentheses)
}

/// Pop operators of greater or equal precedence, then push `op`.
fn push_operator(op: Operator, operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(Token::Operator(top)) = operators.last() {
        if top.precedence() < op.precedence() {
            break;
        }
        output.push(Token::Operator(*top));
        operators.pop();
    }
    operators.push(Token::Operator(op));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::token::format_postfix;

    fn postfix(expression: &str) -> String {
        format_postfix(&convert(expression).unwrap())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("2+3*4"), "2 3 4 * +");
        assert_eq!(postfix("2*3+4"), "2 3 * 4 +");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(postfix("10-2-3"), "10 2 - 3 -");
        assert_eq!(postfix("8/4/2"), "8 4 / 2 /");
        assert_eq!(postfix("1-2+3"), "1 2 - 3 +");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(postfix("(2+3)*4"), "2 3 + 4 *");
        assert_eq!(postfix("2*(3+(4-1))"), "2 3 4 1 - + *");
    }

    #[test]
    fn test_whitespace_is_stripped() {
        assert_eq!(postfix(" 1 2 + 3 "), "12 3 +");
        assert_eq!(postfix("\t4\n*\t5"), "4 5 *");
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(convert(""), Err(ParseError::EmptyExpression));
        assert_eq!(convert("  \t "), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn test_mismatched_parentheses() {
        assert_eq!(convert("(1+2"), Err(ParseError::MismatchedParentheses));
        assert_eq!(convert("1+2)"), Err(ParseError::MismatchedParentheses));
        assert_eq!(convert(")("), Err(ParseError::MismatchedParentheses));
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(convert("1&2"), Err(ParseError::InvalidCharacter('&')));
        assert_eq!(convert("2^3"), Err(ParseError::InvalidCharacter('^')));
        assert_eq!(convert("x"), Err(ParseError::InvalidCharacter('x')));
    }

    #[test]
    fn test_arity_and_literals_pass_through() {
        assert_eq!(postfix("5+"), "5 +");
        assert_eq!(postfix("-3"), "3 -");
        assert_eq!(postfix("1.2.3+."), "1.2.3 . +");
    }
}
