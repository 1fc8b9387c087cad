//! End-to-end tests for the public calculator API.

use rpncalc::api::{self, ApiConfig};
use rpncalc::calculator::{
    CalcError, Operator, convert, evaluate, evaluate_expression, format_postfix,
};
use rpncalc::calculate;

fn check(expression: &str, expected: f64) {
    let value = calculate(expression)
        .unwrap_or_else(|e| panic!("calculate({:?}) failed: {}", expression, e));
    assert!(
        (value - expected).abs() < 1e-9,
        "calculate({:?}) = {}, expected {}",
        expression,
        value,
        expected
    );
}

#[test]
fn test_arithmetic() {
    check("2+3*4", 14.0);
    check("(2+3)*4", 20.0);
    check("10-2-3", 5.0);
    check("((1))", 1.0);
    check("3.5 * 2 - 1 / 4", 6.75);
    check("(1+2)*(3+4)/(5-2)", 7.0);
    check("0.1+0.2", 0.3);
    check("1-2", -1.0);
}

#[test]
fn test_error_kinds() {
    assert_eq!(calculate(""), Err(CalcError::EmptyExpression));
    assert_eq!(calculate("   "), Err(CalcError::EmptyExpression));
    assert_eq!(calculate("(1+2"), Err(CalcError::MismatchedParentheses));
    assert_eq!(calculate("1+2)"), Err(CalcError::MismatchedParentheses));
    assert_eq!(calculate("1/0"), Err(CalcError::DivisionByZero));
    assert_eq!(calculate("1/(2-2)"), Err(CalcError::DivisionByZero));
    assert_eq!(calculate("1+"), Err(CalcError::InsufficientOperands(Operator::Add)));
    assert_eq!(calculate("1&2"), Err(CalcError::InvalidCharacter('&')));
    assert_eq!(calculate("."), Err(CalcError::InvalidNumber(".".to_string())));
}

#[test]
fn test_stages_compose() {
    let tokens = convert("4 / (1 + 1) * 3").unwrap();
    assert_eq!(format_postfix(&tokens), "4 1 1 + / 3 *");
    assert_eq!(evaluate(&tokens), Ok(6.0));
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || calculate(&format!("{} * (2 + 3)", i))))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(i as f64 * 5.0));
    }
}

#[test]
fn test_front_end_wrappers() {
    let result = evaluate_expression("1234 * 10");
    assert_eq!(result.display(), "12,340");

    let response = api::handle("POST", br#"{"expression": "(2+3)*4"}"#, &ApiConfig::default());
    assert_eq!(response.status, 200);
    assert_eq!(response.body.result.as_deref(), Some("20"));
}
