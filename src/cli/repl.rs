//! Read-evaluate-print loop

use std::io::{BufRead, Write};

use super::{CliError, run_pipeline};
use crate::{Lexer, output::format_number};

pub const PROMPT: &str = "Enter a mathematical expression ('exit' to stop): ";

/// Line that ends the session. Matched exactly, after the line terminator is
/// removed.
const EXIT_COMMAND: &str = "exit";

/// Options for the REPL
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplOptions {
    /// Print the prompt before each line (off when input is piped)
    pub prompt: bool,
    /// Trace tokens and postfix order to the error stream
    pub verbose: bool,
}

/// Counts reported when the loop ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    pub evaluated: usize,
    pub failed: usize,
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Reads expressions from `input` until `exit` or end of input.
///
/// Results go to `out` as
///
/// ```text
/// That evaluates out to:
///  3
///
/// ```
///
/// and failures go to `err`, prefixed `error:` for input that failed to lex
/// and `warning:` for structurally broken expressions. Neither ends the loop.
/// Blank lines are skipped. One lexer is reused for the whole session.
pub fn run_repl<R: BufRead, W: Write, E: Write>(
    mut input: R,
    mut out: W,
    mut err: E,
    options: &ReplOptions,
) -> Result<ReplSummary, CliError> {
    let mut lexer = Lexer::new();
    let mut summary = ReplSummary::default();
    let mut buffer = String::new();

    loop {
        if options.prompt {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            break;
        }
        let line = strip_line_ending(&buffer);

        if options.prompt {
            writeln!(out)?;
        }
        if line == EXIT_COMMAND {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let trace: Option<&mut dyn Write> = if options.verbose { Some(&mut err) } else { None };
        match run_pipeline(&mut lexer, line, trace) {
            Ok(value) => {
                summary.evaluated += 1;
                writeln!(out, "That evaluates out to:\n {}\n", format_number(value))?;
            }
            Err(CliError::Pipeline(e)) => {
                summary.failed += 1;
                let level = if e.is_fatal() { "error" } else { "warning" };
                writeln!(err, "{}: {}", level, e)?;
            }
            Err(e) => return Err(e),
        }
    }

    out.flush()?;
    Ok(summary)
}
