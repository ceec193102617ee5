use std::io::Cursor;

use serde_json::json;
use shunt_calc::cli::{
    CliError, EvalOptions, PROMPT, ReplOptions, ReplSummary, execute_eval, execute_rpn, execute_tokens,
    get_doc_category, get_docs_overview, run_repl,
};

fn repl(input: &str, options: ReplOptions) -> (String, String, ReplSummary) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = run_repl(Cursor::new(input), &mut out, &mut err, &options).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
        summary,
    )
}

// ============================================================================
// REPL
// ============================================================================

#[test]
fn test_repl_prints_results() {
    let (out, err, summary) = repl("1 + 2\n2 ^ 3 ^ 2\n", ReplOptions::default());

    assert_eq!(out, "That evaluates out to:\n 3\n\nThat evaluates out to:\n 512\n\n");
    assert!(err.is_empty());
    assert_eq!(summary, ReplSummary { evaluated: 2, failed: 0 });
}

#[test]
fn test_repl_stops_at_exit() {
    let (out, _, summary) = repl("1\nexit\n2\n", ReplOptions::default());

    assert_eq!(out, "That evaluates out to:\n 1\n\n");
    assert_eq!(summary.evaluated, 1);
}

#[test]
fn test_repl_exit_is_exact() {
    // only the line terminator is removed
    let (_, err, summary) = repl(" exit\nexit \nEXIT\r\nexit\r\n1\n", ReplOptions::default());

    assert_eq!(summary.failed, 3);
    assert_eq!(summary.evaluated, 0);
    assert_eq!(err.lines().count(), 3);
}

#[test]
fn test_repl_continues_after_errors() {
    let (out, err, summary) = repl("3.1.4\n(1 + 2\n1 +\n1 / 0\n", ReplOptions::default());

    assert_eq!(out, "That evaluates out to:\n inf\n\n");
    let lines: Vec<&str> = err.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("error: Lex error:"));
    assert!(lines[1].starts_with("warning: Structure error:"));
    assert!(lines[2].starts_with("warning: Evaluation error:"));
    assert_eq!(summary, ReplSummary { evaluated: 1, failed: 3 });
}

#[test]
fn test_repl_skips_blank_lines() {
    let (out, err, summary) = repl("\n   \n4\n", ReplOptions::default());

    assert_eq!(out, "That evaluates out to:\n 4\n\n");
    assert!(err.is_empty());
    assert_eq!(summary.evaluated, 1);
}

#[test]
fn test_repl_ends_at_eof_without_exit() {
    let (out, _, summary) = repl("5 % 3", ReplOptions::default());

    assert_eq!(out, "That evaluates out to:\n 2\n\n");
    assert_eq!(summary.evaluated, 1);
}

#[test]
fn test_repl_prompt() {
    let options = ReplOptions {
        prompt: true,
        verbose: false,
    };
    let (out, _, _) = repl("2\nexit\n", options);

    assert_eq!(
        out,
        format!("{PROMPT}\nThat evaluates out to:\n 2\n\n{PROMPT}\n")
    );
}

#[test]
fn test_repl_verbose_trace() {
    let options = ReplOptions {
        prompt: false,
        verbose: true,
    };
    let (_, err, _) = repl("-(1 + 2) * 4\n", options);

    assert_eq!(err, "tokens:  neg ( 1 + 2 ) * 4\npostfix: 1 2 + neg 4 *\n");
}

// ============================================================================
// One-shot Commands
// ============================================================================

#[test]
fn test_execute_eval_plain() {
    let options = EvalOptions {
        expression: "(1 + 2) * 3".to_string(),
        ..Default::default()
    };
    let outcome = execute_eval(&options, None).unwrap();

    assert_eq!(outcome.value, 9.0);
    assert_eq!(outcome.render(&options).unwrap(), "9");
}

#[test]
fn test_execute_eval_json() {
    let options = EvalOptions {
        expression: "1 / 4".to_string(),
        json: true,
        pretty: false,
    };
    let rendered = execute_eval(&options, None).unwrap().render(&options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value, json!({"expression": "1 / 4", "result": 0.25}));
}

#[test]
fn test_execute_eval_json_non_finite() {
    let options = EvalOptions {
        expression: "1/0".to_string(),
        json: true,
        pretty: true,
    };
    let rendered = execute_eval(&options, None).unwrap().render(&options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["result"], json!("inf"));
    assert!(rendered.contains('\n'));
}

#[test]
fn test_execute_eval_trace() {
    let options = EvalOptions {
        expression: "2 ^ 3 ^ 2".to_string(),
        ..Default::default()
    };
    let mut trace = Vec::new();
    execute_eval(&options, Some(&mut trace)).unwrap();

    assert_eq!(
        String::from_utf8(trace).unwrap(),
        "tokens:  2 ^ 3 ^ 2\npostfix: 2 3 2 ^ ^\n"
    );
}

#[test]
fn test_execute_eval_errors() {
    let options = EvalOptions {
        expression: "1 $ 2".to_string(),
        ..Default::default()
    };
    let err = execute_eval(&options, None).unwrap_err();
    assert!(matches!(err, CliError::Pipeline(_)));
    assert!(err.is_fatal());

    let options = EvalOptions {
        expression: "(1".to_string(),
        ..Default::default()
    };
    assert!(!execute_eval(&options, None).unwrap_err().is_fatal());
}

#[test]
fn test_execute_rpn() {
    assert_eq!(execute_rpn("1 + 2 * 3").unwrap(), "1 2 3 * +");
    assert!(execute_rpn("(1").is_err());
}

#[test]
fn test_execute_tokens() {
    let rendered = execute_tokens("-2.5 ^ 3_0", false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(
        value,
        json!([
            {"kind": "subtract", "text": "-", "precedence": 5, "associativity": "left", "unary": true},
            {"kind": "float", "text": "2.5", "value": 2.5},
            {"kind": "power", "text": "^", "precedence": 4, "associativity": "right", "unary": false},
            {"kind": "integer", "text": "3_0", "value": 30}
        ])
    );
}

// ============================================================================
// Docs
// ============================================================================

#[test]
fn test_docs() {
    assert!(get_docs_overview().contains("operators"));
    assert!(get_doc_category("ops").unwrap().contains("RANK"));
    assert!(get_doc_category("Syntax").is_ok());
    assert!(matches!(
        get_doc_category("functions"),
        Err(CliError::UnknownCategory(_))
    ));
}
