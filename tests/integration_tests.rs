use shunt_calc::{
    Error, EvalError, LexError, Lexer, ReorderError, evaluate, evaluate_expression, evaluate_with, lex, reorder,
};

fn eval(input: &str) -> f64 {
    evaluate_expression(input).unwrap_or_else(|e| panic!("{} failed: {}", input, e))
}

// ============================================================================
// Standard Arithmetic
// ============================================================================

#[test]
fn test_basic_expressions() {
    let test_cases = vec![
        ("1 + 2", 3.0),
        ("1 + 2 * 3", 7.0),
        ("(1 + 2) * 3", 9.0),
        ("2 * (1 + 2)", 6.0),
        ("10 - 4 - 3", 3.0),
        ("100 / 10 / 5", 2.0),
        ("2 x 3 X 4", 24.0),
        ("7 % 4 + 1", 4.0),
        ("1.5 * 4", 6.0),
        ("3_000 / 1_000", 3.0),
        (".5 + .25", 0.75),
        ("((2))", 2.0),
        ("2 * (3 + (4 - 1)) ^ 2", 72.0),
    ];

    for (input, expected) in test_cases {
        assert_eq!(eval(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_whitespace_idempotence() {
    assert_eq!(eval("1+2"), eval(" 1 + 2 "));
    assert_eq!(eval("(1+2)*3"), eval("( 1\t+ 2 )\n* 3\r"));
}

#[test]
fn test_right_associative_power() {
    assert_eq!(eval("2^3^2"), 512.0);
    assert_eq!(eval("(2^3)^2"), 64.0);
}

// ============================================================================
// Unary Minus
// ============================================================================

#[test]
fn test_negation_binds_tighter_than_power() {
    // unary minus (5) outranks power (4): (-3)^2
    assert_eq!(eval("-3^2"), 9.0);
    assert_eq!(eval("-(3^2)"), -9.0);
}

#[test]
fn test_modulo_binds_tighter_than_negation() {
    assert_eq!(eval("-7 % 4"), -3.0);
    assert_eq!(eval("4 % -3"), 1.0);
}

#[test]
fn test_negation_in_context() {
    let test_cases = vec![
        ("-5", -5.0),
        ("--5", 5.0),
        ("3 - -2", 5.0),
        ("3 * -2", -6.0),
        ("-2 * -2", 4.0),
        ("2 ^ -1", 0.5),
        ("-(1 + 2) * 4", -12.0),
        ("(-2) ^ 3", -8.0),
    ];

    for (input, expected) in test_cases {
        assert_eq!(eval(input), expected, "Failed for input: {}", input);
    }
}

// ============================================================================
// Floating Point
// ============================================================================

#[test]
fn test_division_by_zero_is_infinite() {
    assert_eq!(eval("1/0"), f64::INFINITY);
    assert_eq!(eval("-1/0"), f64::NEG_INFINITY);
    assert!(eval("0/0").is_nan());
}

#[test]
fn test_large_integers_cast_to_float() {
    assert_eq!(eval("9_007_199_254_740_993"), 9_007_199_254_740_992.0);
}

// ============================================================================
// Error Classes
// ============================================================================

#[test]
fn test_lex_errors_are_fatal() {
    let test_cases = vec!["3.1.4", "1 + .", "2 $ 3", "sqrt(4)"];

    for input in test_cases {
        let err = evaluate_expression(input).unwrap_err();
        assert!(matches!(err, Error::Lex(_)), "Failed for input: {}", input);
        assert!(err.is_fatal(), "Failed for input: {}", input);
    }
}

#[test]
fn test_structure_errors_are_recoverable() {
    let test_cases = vec![
        (")1+2", ReorderError::UnmatchedRightParen),
        ("1+2)*3", ReorderError::UnmatchedRightParen),
        ("(1+2", ReorderError::UnmatchedLeftParen),
    ];

    for (input, expected) in test_cases {
        let err = evaluate_expression(input).unwrap_err();
        assert_eq!(err, Error::Reorder(expected), "Failed for input: {}", input);
        assert!(!err.is_fatal(), "Failed for input: {}", input);
    }
}

#[test]
fn test_paren_removal_is_structural() {
    assert_eq!(eval("(1+2)*3"), 9.0);
    assert!(lex("1+2)*3").is_ok());
    assert!(matches!(evaluate_expression("1+2)*3"), Err(Error::Reorder(_))));
}

#[test]
fn test_malformed_expressions() {
    assert!(matches!(
        evaluate_expression("1 +"),
        Err(Error::Eval(EvalError::StackUnderflow { .. }))
    ));
    assert_eq!(
        evaluate_expression("(1)(2)"),
        Err(Error::Eval(EvalError::UnconsumedOperands { count: 2 }))
    );
    assert_eq!(evaluate_expression(""), Err(Error::Eval(EvalError::EmptyExpression)));
    assert_eq!(evaluate_expression("()"), Err(Error::Eval(EvalError::EmptyExpression)));
}

#[test]
fn test_error_display() {
    let err = evaluate_expression("3.1.4").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Lex error: Repeated decimal point in literal '3.1.' at position 3"
    );

    let err = evaluate_expression("(1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Structure error: Mismatched parenthesis error: '(' is never closed"
    );
}

#[test]
fn test_error_conversion() {
    let err: Error = LexError::LoneDecimalPoint { position: 0 }.into();
    assert!(err.is_fatal());
    let err: Error = EvalError::EmptyExpression.into();
    assert!(!err.is_fatal());
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_stages_compose() {
    let tokens = lex("2 * (3 + 4)").unwrap();
    let postfix = reorder(tokens).unwrap();
    assert_eq!(evaluate(postfix).unwrap(), 14.0);
}

#[test]
fn test_shared_lexer_across_lines() {
    let mut lexer = Lexer::new();
    assert_eq!(evaluate_with(&mut lexer, "1 + 1").unwrap(), 2.0);
    assert!(evaluate_with(&mut lexer, "1 + ?").is_err());
    assert_eq!(evaluate_with(&mut lexer, "-2 ^ 2").unwrap(), 4.0);
}
