//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Expression input: positional text or --file.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(expr_arg()).arg(file_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("llparse")
        .about("Parse, evaluate and trace integer arithmetic expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(eval_command())
        .subcommand(ast_command())
        .subcommand(trace_command())
        .subcommand(dump_command())
}

/// Evaluate an expression.
pub fn eval_command() -> Command {
    let cmd = Command::new("eval")
        .about("Evaluate an expression")
        .override_usage(
            "\
  llparse eval <EXPR>
  llparse eval -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  llparse eval '1 + 2 * 3'            # prints 7
  llparse eval -f expr.txt            # expression from a file
  echo '(1 + 2) * 3' | llparse eval -f -"#,
        )
        .arg(fuel_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Show the expression tree.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the parsed expression tree")
        .after_help(
            r#"EXAMPLES:
  llparse ast '( 1 + ( 2 * 3 ) )'     # prints [+, 1, [*, 2, 3]]
  llparse ast '1 - 2' --json          # raw value tree"#,
        )
        .arg(json_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Trace grammar evaluation.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace grammar evaluation for debugging")
        .after_help(
            r#"EXAMPLES:
  llparse trace '1 + 2'               # leaf matchers only
  llparse trace '1 + 2' -v            # every node
  llparse trace '1 + 2' -vv           # every node with matched text"#,
        )
        .arg(verbose_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Dump the grammar's node arena.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the arithmetic grammar's node graph")
        .arg(color_arg())
}
