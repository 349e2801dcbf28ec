//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Input selection: positional text or --file, never both
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Conversion into command args (verbosity, color)

use std::path::PathBuf;

use llparse_lib::Verbosity;

use super::*;
use crate::cli::commands::{ast_command, dump_command, eval_command, trace_command};
use crate::commands::ast::AstArgs;
use crate::commands::trace::TraceArgs;
use crate::util::InputSpec;

#[test]
fn eval_takes_positional_expression() {
    let m = eval_command()
        .try_get_matches_from(["eval", "1 + 2"])
        .unwrap();
    let params = EvalParams::from_matches(&m);

    assert_eq!(params.expr.as_deref(), Some("1 + 2"));
    assert_eq!(params.file, None);
    assert_eq!(params.fuel, 1_000_000);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn eval_takes_file() {
    let m = eval_command()
        .try_get_matches_from(["eval", "-f", "expr.txt", "--fuel", "50"])
        .unwrap();
    let params = EvalParams::from_matches(&m);

    assert_eq!(params.file, Some(PathBuf::from("expr.txt")));
    assert_eq!(params.fuel, 50);
}

#[test]
fn expression_and_file_conflict() {
    let result = eval_command().try_get_matches_from(["eval", "1", "--file", "expr.txt"]);

    assert!(result.is_err());
}

#[test]
fn fuel_must_be_a_number() {
    let result = eval_command().try_get_matches_from(["eval", "1", "--fuel", "lots"]);

    assert!(result.is_err());
}

#[test]
fn ast_json_flag() {
    let m = ast_command()
        .try_get_matches_from(["ast", "1", "--json", "--color", "never"])
        .unwrap();
    let args: AstArgs = AstParams::from_matches(&m).into();

    assert!(args.json);
    assert!(!args.color);
    assert_eq!(args.input, InputSpec::Text("1".to_owned()));
}

#[test]
fn trace_verbosity_levels() {
    let verbosity = |argv: &[&str]| {
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        args.verbosity
    };

    assert_eq!(verbosity(&["trace", "1"]), Verbosity::Default);
    assert_eq!(verbosity(&["trace", "1", "-v"]), Verbosity::Verbose);
    assert_eq!(verbosity(&["trace", "1", "-vv"]), Verbosity::VeryVerbose);
    assert_eq!(verbosity(&["trace", "1", "-vvv"]), Verbosity::VeryVerbose);
}

#[test]
fn trace_color_always() {
    let m = trace_command()
        .try_get_matches_from(["trace", "1", "--color", "always"])
        .unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();

    assert!(args.color);
}

#[test]
fn color_rejects_unknown_values() {
    let result = dump_command().try_get_matches_from(["dump", "--color", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn dump_takes_no_input() {
    assert!(dump_command().try_get_matches_from(["dump"]).is_ok());
    assert!(dump_command().try_get_matches_from(["dump", "1 + 2"]).is_err());
}

#[test]
fn missing_input() {
    assert_eq!(InputSpec::new(None, None), InputSpec::Missing);
}

#[test]
fn cli_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["llparse"]).is_err());
    assert!(
        build_cli()
            .try_get_matches_from(["llparse", "eval", "2 * 3"])
            .is_ok()
    );
}
