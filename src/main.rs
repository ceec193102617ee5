use clap::{Parser as ClapParser, Subcommand};
use shunt_calc::cli::{self, CliError, EvalOptions, ReplOptions};
use std::io::{self, Write};

#[derive(ClapParser)]
#[command(name = "shunt")]
#[command(about = "shunt - evaluate arithmetic expressions with the shunting-yard algorithm")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate expressions line by line until 'exit' (the default)
    Repl {
        /// Print tokens and postfix order to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Evaluate a single expression
    Eval {
        /// The expression to evaluate
        expression: String,

        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Print tokens and postfix order to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the postfix (reverse Polish) form of an expression
    Rpn {
        /// The expression to reorder
        expression: String,
    },

    /// Print the tokens of an expression as JSON
    Tokens {
        /// The expression to lex
        expression: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'shunt docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Repl { verbose: false }) {
        Commands::Repl { verbose } => run_repl(verbose),
        Commands::Eval {
            expression,
            json,
            pretty,
            verbose,
        } => run_eval(expression, json, pretty, verbose),
        Commands::Rpn { expression } => cli::execute_rpn(&expression).map(|rpn| println!("{}", rpn)),
        Commands::Tokens { expression, pretty } => {
            cli::execute_tokens(&expression, pretty).map(|json| println!("{}", json))
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        let level = if e.is_fatal() { "error" } else { "warning" };
        eprintln!("{}: {}", level, e);
        std::process::exit(1);
    }
}

fn run_repl(verbose: bool) -> Result<(), CliError> {
    let interactive = atty::is(atty::Stream::Stdin);
    let options = ReplOptions {
        prompt: interactive,
        verbose,
    };

    let stdin = io::stdin();
    let summary = cli::run_repl(stdin.lock(), io::stdout().lock(), io::stderr().lock(), &options)?;

    // piped scripts report failure through the exit code
    if !interactive && summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn run_eval(expression: String, json: bool, pretty: bool, verbose: bool) -> Result<(), CliError> {
    let options = EvalOptions {
        expression,
        json,
        pretty,
    };

    let mut stderr = io::stderr().lock();
    let trace: Option<&mut dyn Write> = if verbose { Some(&mut stderr) } else { None };

    let outcome = cli::execute_eval(&options, trace)?;
    println!("{}", outcome.render(&options)?);
    Ok(())
}
