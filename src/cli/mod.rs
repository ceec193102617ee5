//! CLI support for shunt-calc
//!
//! The REPL and the one-shot commands live here, independent of argument
//! parsing, so they can be driven from tests or embedded in other tools.

mod docs;
mod eval;
mod repl;

pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use eval::{EvalOptions, EvalOutcome, execute_eval, execute_rpn, execute_tokens};
pub use repl::{PROMPT, ReplOptions, ReplSummary, run_repl};

use std::io::{self, Write};

use crate::{Error, Lexer, evaluate, output::format_tokens, reorder};

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Lexing, reordering or evaluation failed
    #[error(transparent)]
    Pipeline(#[from] Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'shunt docs' to see available categories.")]
    UnknownCategory(String),
}

impl CliError {
    /// Fatal errors reject the input; everything else is reported as a warning.
    pub fn is_fatal(&self) -> bool {
        match self {
            CliError::Pipeline(e) => e.is_fatal(),
            _ => true,
        }
    }
}

/// Runs the full pipeline, writing the token and postfix forms to `trace`.
pub(crate) fn run_pipeline(
    lexer: &mut Lexer,
    expression: &str,
    mut trace: Option<&mut dyn Write>,
) -> Result<f64, CliError> {
    let tokens = lexer.lex(expression).map_err(Error::from)?;
    if let Some(w) = trace.as_deref_mut() {
        writeln!(w, "tokens:  {}", format_tokens(&tokens))?;
    }

    let postfix = reorder(tokens).map_err(Error::from)?;
    if let Some(w) = trace.as_deref_mut() {
        writeln!(w, "postfix: {}", format_tokens(&postfix))?;
    }

    Ok(evaluate(postfix).map_err(Error::from)?)
}
