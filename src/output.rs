//! Text and JSON rendering of tokens and results.
//!
//! Used for diagnostics (`--verbose`, `shunt tokens`, `shunt rpn`) and for the
//! results printed by the driver.
//!
//! # Examples
//!
//! ```
//! use shunt_calc::output::{format_number, format_tokens};
//! use shunt_calc::{lex, reorder};
//!
//! assert_eq!(format_number(3.0), "3");
//! assert_eq!(format_number(f64::INFINITY), "inf");
//!
//! let postfix = reorder(lex("-(1 + 2) * 4").unwrap()).unwrap();
//! assert_eq!(format_tokens(&postfix), "1 2 + neg 4 *");
//! ```

use std::fmt;

use serde_json::{Value, json};

use crate::ast::{Associativity, Token, TokenKind};

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unary_negation() {
            write!(f, "neg")
        } else {
            write!(f, "{}", self.text())
        }
    }
}

/// Renders a result the way the driver prints it.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Space separated tokens, in the order given. Unary minus is written `neg`.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn kind_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::LeftParen => "left_paren",
        TokenKind::RightParen => "right_paren",
        TokenKind::Add => "add",
        TokenKind::Subtract => "subtract",
        TokenKind::Multiply => "multiply",
        TokenKind::Divide => "divide",
        TokenKind::Modulo => "modulo",
        TokenKind::Power => "power",
        TokenKind::Integer(_) => "integer",
        TokenKind::Float(_) => "float",
    }
}

/// JSON has no infinities or NaN; those are written as strings.
fn number_to_json(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(format_number(value)))
}

/// Converts one token to a JSON object.
pub fn token_to_json(token: &Token) -> Value {
    let mut obj = json!({
        "kind": kind_name(token.kind()),
        "text": token.text(),
    });

    if let Some(map) = obj.as_object_mut() {
        match token.kind() {
            TokenKind::Integer(n) => {
                map.insert("value".to_string(), Value::from(n));
            }
            TokenKind::Float(n) => {
                map.insert("value".to_string(), number_to_json(n));
            }
            _ => {
                let associativity = match token.associativity() {
                    Associativity::Left => "left",
                    Associativity::Right => "right",
                };
                map.insert("precedence".to_string(), Value::from(token.precedence()));
                map.insert("associativity".to_string(), Value::from(associativity));
                map.insert("unary".to_string(), Value::from(token.is_unary_negation()));
            }
        }
    }

    obj
}

pub fn tokens_to_json(tokens: &[Token]) -> Value {
    Value::Array(tokens.iter().map(token_to_json).collect())
}

/// `{"expression": ..., "result": ...}` for one evaluated line.
pub fn result_to_json(expression: &str, value: f64) -> Value {
    json!({
        "expression": expression,
        "result": number_to_json(value),
    })
}
