//! One-shot evaluation of a single expression

use std::io::Write;

use super::{CliError, run_pipeline};
use crate::{
    Error, Lexer,
    output::{format_number, format_tokens, result_to_json, tokens_to_json},
    reorder,
};

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// The expression to evaluate
    pub expression: String,
    /// Print the result as a JSON object
    pub json: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// A successfully evaluated expression
#[derive(Debug, Clone, PartialEq)]
pub struct EvalOutcome {
    pub expression: String,
    pub value: f64,
}

impl EvalOutcome {
    /// Renders the result as plain text or JSON, per `options`.
    pub fn render(&self, options: &EvalOptions) -> Result<String, CliError> {
        if !options.json {
            return Ok(format_number(self.value));
        }

        let json = result_to_json(&self.expression, self.value);
        let text = if options.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };
        Ok(text)
    }
}

/// Evaluate one expression, optionally tracing its stages to `trace`
pub fn execute_eval(
    options: &EvalOptions,
    trace: Option<&mut dyn Write>,
) -> Result<EvalOutcome, CliError> {
    let mut lexer = Lexer::new();
    let value = run_pipeline(&mut lexer, &options.expression, trace)?;

    Ok(EvalOutcome {
        expression: options.expression.clone(),
        value,
    })
}

/// Postfix form of an expression, space separated
pub fn execute_rpn(expression: &str) -> Result<String, CliError> {
    let tokens = Lexer::new().lex(expression).map_err(Error::from)?;
    let postfix = reorder(tokens).map_err(Error::from)?;
    Ok(format_tokens(&postfix))
}

/// Token list of an expression as JSON
pub fn execute_tokens(expression: &str, pretty: bool) -> Result<String, CliError> {
    let tokens = Lexer::new().lex(expression).map_err(Error::from)?;
    let json = tokens_to_json(&tokens);

    let text = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}
