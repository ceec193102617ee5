//! Documentation content for shunt CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "syntax" | "literals" => Some(Self::Syntax),
            "operators" | "ops" | "precedence" => Some(Self::Operators),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SHUNT DOCUMENTATION

shunt evaluates arithmetic expressions. Input is split into tokens, reordered
into postfix (reverse Polish) order with the shunting-yard algorithm, and
reduced to a single floating-point number.

DOCUMENTATION CATEGORIES

  syntax            Numbers, whitespace and parentheses
  operators         Operators, precedence and associativity
  errors            What is rejected and how it is reported

QUICK REFERENCE

  1 + 2 * 3         => 7
  (1 + 2) * 3       => 9
  2 ^ 3 ^ 2         => 512
  -3 ^ 2            => 9
  1 / 0             => inf

Run 'shunt doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX

NUMBERS
  42                Integer
  3.14              Float
  .5                Float (leading point, must be followed by a digit)
  2.                Float (trailing point)
  1_000_000         Underscores are ignored inside a number

All numbers are evaluated as 64-bit floats.

WHITESPACE
  Spaces, tabs, carriage returns and newlines are ignored.
  "1+2" and " 1 + 2 " are the same expression.

PARENTHESES
  ( ... )           Grouping, may be nested
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

  SYMBOL      MEANING          RANK   ASSOCIATIVITY
  %           remainder        6      left
  - (prefix)  negation         5      left
  ^           power            4      right
  * x X       multiplication   3      left
  /           division         3      left
  +           addition         2      left
  -           subtraction      2      left

Higher rank binds tighter. A '-' is a negation when it starts the expression
or follows an operator or '('.

NOTES
  -3 ^ 2            => 9      negation binds tighter than power
  -7 % 4            => -3     remainder binds tighter than negation
  2 ^ 3 ^ 2         => 512    power groups right to left
  10 - 4 - 3        => 3      everything else groups left to right
  1 / 0             => inf    division follows IEEE-754, no error
"#;

const ERRORS_DOC: &str = r#"ERRORS

LEXICAL ERRORS (reported as 'error:')
  3.1.4             Second decimal point in one number
  1 + .             '.' not followed by a digit
  2 $ 3             Unknown character

STRUCTURE ERRORS (reported as 'warning:')
  1 + 2)            ')' without a matching '('
  (1 + 2            '(' never closed

EVALUATION ERRORS (reported as 'warning:')
  1 +               Operator without enough operands
  (1)(2)            Values left over without an operator

In the REPL none of these end the session; 'exit' does.
"#;
