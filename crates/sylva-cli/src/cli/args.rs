//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use sylva_core::Span;

/// Tree JSON file (positional, `-` for stdin).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("ESTree JSON file (`-` reads stdin)")
}

/// Node schema override (--schema).
pub fn schema_arg() -> Arg {
    Arg::new("schema")
        .long("schema")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Node schema JSON (defaults to the built-in ESTree schema)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Hide scalar attributes (--no-attrs).
pub fn no_attrs_arg() -> Arg {
    Arg::new("no_attrs")
        .long("no-attrs")
        .action(ArgAction::SetTrue)
        .help("Hide scalar attributes (name, operator, value, ...)")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Raise log level (-v info, -vv debug, -vvv trace); SYLVA_LOG overrides")
}

/// Node kind filter (--kind).
pub fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .value_name("KIND")
        .help("Nodes of this kind")
}

/// Source position (--at).
pub fn at_arg() -> Arg {
    Arg::new("at")
        .long("at")
        .value_name("POS")
        .value_parser(value_parser!(u32))
        .help("Innermost node containing this byte offset")
}

/// Byte range (--overlapping).
pub fn overlapping_arg() -> Arg {
    Arg::new("overlapping")
        .long("overlapping")
        .value_name("START..END")
        .value_parser(parse_span)
        .help("Nodes overlapping this byte range")
}

/// Byte range (--range).
pub fn range_arg() -> Arg {
    Arg::new("range")
        .long("range")
        .value_name("START..END")
        .value_parser(parse_span)
        .help("Only tokens inside this byte range")
}

/// Parse `START..END` into a span.
pub fn parse_span(text: &str) -> Result<Span, String> {
    let (start, end) = text
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got `{text}`"))?;
    let start: u32 = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid start offset `{start}`"))?;
    let end: u32 = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid end offset `{end}`"))?;
    if end < start {
        return Err(format!("range end {end} is before start {start}"));
    }
    Ok(Span::new(start, end))
}
