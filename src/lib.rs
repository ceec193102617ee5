pub mod ast;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod shunting;

pub use ast::{Associativity, BinOp, Token, TokenKind};
pub use error::Error;
pub use evaluator::{EvalError, evaluate};
pub use lexer::{LexError, Lexer, lex};
pub use shunting::{ReorderError, reorder};

/// Evaluates an arithmetic expression: lex, reorder to postfix, reduce.
///
/// # Examples
///
/// ```
/// use shunt_calc::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2 ^ 3 ^ 2").unwrap(), 512.0);
/// assert_eq!(evaluate_expression("-3^2").unwrap(), 9.0);
/// assert!(evaluate_expression("(1 + 2").is_err());
/// ```
pub fn evaluate_expression(input: &str) -> Result<f64, Error> {
    evaluate_with(&mut Lexer::new(), input)
}

/// Same as [`evaluate_expression`], reusing an existing lexer.
pub fn evaluate_with(lexer: &mut Lexer, input: &str) -> Result<f64, Error> {
    let tokens = lexer.lex(input)?;
    let postfix = reorder(tokens)?;
    Ok(evaluate(postfix)?)
}
