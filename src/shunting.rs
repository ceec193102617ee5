//! Infix to postfix reordering with the shunting-yard algorithm.
//!
//! Operators are ordered by the rank and associativity carried on each
//! [`Token`]; parentheses are consumed and never appear in the output.

use crate::ast::{Token, TokenKind};

/// Structural errors found while reordering.
///
/// These are recoverable: the expression is reported and treated as absent,
/// the caller keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    /// A `)` with no `(` before it
    #[error("Right parenthesis error: ')' has no matching '('")]
    UnmatchedRightParen,

    /// A `(` still open at the end of input
    #[error("Mismatched parenthesis error: '(' is never closed")]
    UnmatchedLeftParen,
}

/// Reorders infix tokens into postfix (reverse Polish) order.
///
/// An operator on the stack is moved to the output before pushing a new
/// operator when the new one is left-associative and binds no tighter, or
/// right-associative and binds strictly looser. A unary minus is a prefix
/// operator and never pops: no operand to its left has been read yet.
///
/// # Examples
///
/// ```
/// use shunt_calc::{lexer::lex, shunting::reorder, output::format_tokens};
///
/// let postfix = reorder(lex("2 ^ 3 ^ 2").unwrap()).unwrap();
/// assert_eq!(format_tokens(&postfix), "2 3 2 ^ ^");
/// ```
pub fn reorder(tokens: Vec<Token>) -> Result<Vec<Token>, ReorderError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind() {
            TokenKind::Integer(_) | TokenKind::Float(_) => output.push(token),

            TokenKind::LeftParen => stack.push(token),

            TokenKind::RightParen => loop {
                match stack.pop() {
                    Some(top) if top.kind() == TokenKind::LeftParen => break,
                    Some(top) => output.push(top),
                    None => return Err(ReorderError::UnmatchedRightParen),
                }
            },

            _ => {
                if !token.is_unary_negation() {
                    while let Some(top) = stack.last() {
                        if top.kind() == TokenKind::LeftParen || !yields_to(&token, top) {
                            break;
                        }
                        if let Some(top) = stack.pop() {
                            output.push(top);
                        }
                    }
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind() == TokenKind::LeftParen {
            return Err(ReorderError::UnmatchedLeftParen);
        }
        output.push(top);
    }

    Ok(output)
}

/// Whether `top` must be emitted before `incoming` is pushed.
fn yields_to(incoming: &Token, top: &Token) -> bool {
    if incoming.is_right_associative() {
        incoming.precedence() < top.precedence()
    } else {
        incoming.precedence() <= top.precedence()
    }
}
