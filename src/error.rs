use crate::{evaluator::EvalError, lexer::LexError, shunting::ReorderError};

/// Any failure along the lex → reorder → evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Structure error: {0}")]
    Reorder(#[from] ReorderError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl Error {
    /// True for the lexical class, which rejects the input outright.
    ///
    /// Structural and evaluation errors leave the caller free to carry on
    /// with the next expression as if this one were absent.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Lex(_))
    }
}
