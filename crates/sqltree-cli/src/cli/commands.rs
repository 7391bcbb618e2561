//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! The unified flags feature is implemented here: every command accepts
//! every flag, with irrelevant ones hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden tree-view args (for commands that don't print a tree).
fn with_hidden_tree_args(cmd: Command) -> Command {
    cmd.arg(raw_arg().hide(true))
        .arg(trivia_arg().hide(true))
        .arg(spans_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
}

/// Add hidden output args (for commands that don't produce JSON).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(json_arg().hide(true))
        .arg(compact_arg().hide(true))
        .arg(strict_arg().hide(true))
        .arg(color_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("sqltree")
        .about("Lossless syntax trees for PostgreSQL/BigQuery SQL")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tree_command())
        .subcommand(check_command())
        .subcommand(trace_command())
}

/// Show the syntax tree of SQL input.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Show the syntax tree of SQL input")
        .override_usage(
            "\
  sqltree tree <FILE>
  sqltree tree -s <TEXT>
  sqltree tree - < query.sql",
        )
        .after_help(
            r#"EXAMPLES:
  sqltree tree query.sql                  # named nodes and fields
  sqltree tree query.sql --raw --trivia   # every node and token
  sqltree tree -s 'SELECT 1' --spans      # with byte ranges
  sqltree tree -s 'a OR b' --entry expression
  sqltree tree query.sql --json           # JSON tree"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(entry_arg())
        .arg(raw_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(json_arg())
        .arg(compact_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_trace_args(cmd.arg(strict_arg().hide(true)))
}

/// Validate SQL input.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate SQL input")
        .override_usage(
            "\
  sqltree check <FILE>
  sqltree check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  sqltree check query.sql             # silent when valid
  sqltree check query.sql --strict    # warnings fail too
  sqltree check query.sql --json      # diagnostics as JSON
  cat query.sql | sqltree check -"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(entry_arg())
        .arg(strict_arg())
        .arg(json_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_trace_args(with_hidden_tree_args(cmd.arg(compact_arg().hide(true))))
}

/// Trace the parser.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace the parser on SQL input")
        .override_usage(
            "\
  sqltree trace <FILE> [-v|-vv]
  sqltree trace -s <TEXT> [-v|-vv]",
        )
        .after_help(
            r#"EXAMPLES:
  sqltree trace -s 'SELECT 1'          # nodes and diagnostics
  sqltree trace query.sql -v           # plus tokens
  sqltree trace query.sql -vv          # plus trivia and node exits
  sqltree trace query.sql --fuel 100   # stop after 100 tokens"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(entry_arg())
        .arg(verbose_arg())
        .arg(no_result_arg())
        .arg(fuel_arg());

    // Hidden unified flags
    with_hidden_output_args(with_hidden_tree_args(cmd))
}
