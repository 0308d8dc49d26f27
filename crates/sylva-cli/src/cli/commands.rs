//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::{ArgGroup, Command};

use super::args::*;

/// Input and schema args shared by every command.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_arg()).arg(schema_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("sylva")
        .about("Inspect, query and annotate ESTree-shaped syntax trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(tree_command())
        .subcommand(find_command())
        .subcommand(stats_command())
        .subcommand(comments_command())
        .subcommand(tokens_command())
}

/// Dump a tree with field labels.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Dump a tree with field labels")
        .after_help(
            r#"EXAMPLES:
  sylva tree ast.json                 # indented dump
  sylva tree ast.json --spans         # with byte ranges
  espree-dump app.js | sylva tree -   # read from stdin"#,
        )
        .arg(spans_arg())
        .arg(no_attrs_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Search nodes by kind or position.
pub fn find_command() -> Command {
    let cmd = Command::new("find")
        .about("Find nodes by kind or position")
        .after_help(
            r#"EXAMPLES:
  sylva find ast.json --kind Identifier
  sylva find ast.json --at 42
  sylva find ast.json --overlapping 10..30"#,
        )
        .arg(kind_arg())
        .arg(at_arg())
        .arg(overlapping_arg())
        .group(
            ArgGroup::new("query")
                .args(["kind", "at", "overlapping"])
                .required(true),
        )
        .arg(color_arg());

    with_input_args(cmd)
}

/// Structural metrics.
pub fn stats_command() -> Command {
    let cmd = Command::new("stats")
        .about("Show node count, depth and kind histogram")
        .arg(json_arg());

    with_input_args(cmd)
}

/// Comment attachment.
pub fn comments_command() -> Command {
    let cmd = Command::new("comments")
        .about("Attach comments to nodes and list the result")
        .arg(json_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Token listing.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("List tokens with operator categories and gaps")
        .arg(range_arg())
        .arg(color_arg());

    with_input_args(cmd)
}
