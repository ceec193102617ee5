use crate::ast::{Token, TokenKind};

/// Errors raised by a postfix sequence that is not well formed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// An operator found fewer operands than it needs
    #[error("Stack underflow: '{operator}' is missing an operand")]
    StackUnderflow { operator: String },

    /// More than one value left once every token was consumed
    #[error("Malformed expression: {count} values left without an operator")]
    UnconsumedOperands { count: usize },

    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,

    /// A token that cannot appear in postfix order, such as a parenthesis
    #[error("Unexpected token '{token}' in postfix sequence")]
    UnexpectedToken { token: String },
}

/// Evaluates a postfix token sequence with a single value stack.
///
/// Literals are pushed as `f64`. A unary minus negates the top value in place;
/// every other operator pops its right operand, then its left operand, and
/// pushes the result. The sequence must reduce to exactly one value.
///
/// # Examples
///
/// ```
/// use shunt_calc::{evaluator::evaluate, lexer::lex};
///
/// // already in postfix order
/// let tokens = lex("2 3 4 + *").unwrap();
/// assert_eq!(evaluate(tokens).unwrap(), 14.0);
/// ```
pub fn evaluate(tokens: Vec<Token>) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let kind = token.kind();
        match kind {
            TokenKind::Integer(n) => stack.push(n as f64),
            TokenKind::Float(n) => stack.push(n),
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(EvalError::UnexpectedToken {
                    token: token.text().to_string(),
                });
            }
            _ if token.is_unary_negation() => {
                let top = stack.last_mut().ok_or_else(|| underflow(&token))?;
                *top = -*top;
            }
            _ => {
                let Some(op) = kind.binary_op() else {
                    return Err(EvalError::UnexpectedToken {
                        token: token.text().to_string(),
                    });
                };
                let rhs = stack.pop().ok_or_else(|| underflow(&token))?;
                let lhs = stack.pop().ok_or_else(|| underflow(&token))?;
                stack.push(op.apply(lhs, rhs));
            }
        }
    }

    match stack.as_slice() {
        [] => Err(EvalError::EmptyExpression),
        [value] => Ok(*value),
        rest => Err(EvalError::UnconsumedOperands { count: rest.len() }),
    }
}

fn underflow(token: &Token) -> EvalError {
    EvalError::StackUnderflow {
        operator: token.text().to_string(),
    }
}
