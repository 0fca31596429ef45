//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose, so the same
//! flag reads the same everywhere.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use super::ColorChoice;

/// Grammar JSON file, `-` for stdin (positional).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .value_parser(value_parser!(PathBuf))
        .help("Grammar JSON file, or - for stdin")
}

/// Inline grammar JSON (-g/--grammar).
pub fn grammar_text_arg() -> Arg {
    Arg::new("grammar_text")
        .short('g')
        .long("grammar")
        .value_name("JSON")
        .help("Inline grammar JSON")
}

/// File to parse (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("File to parse, or - for stdin")
}

/// Inline text to parse (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline text to parse")
}

/// Rule to start from (-r/--rule).
pub fn rule_arg() -> Arg {
    Arg::new("rule")
        .short('r')
        .long("rule")
        .value_name("NAME")
        .help("Rule to match (default: first rule of the grammar)")
}

/// Case-insensitive terminals and ranges (-i/--case-insensitive).
pub fn case_insensitive_arg() -> Arg {
    Arg::new("case_insensitive")
        .short('i')
        .long("case-insensitive")
        .action(ArgAction::SetTrue)
        .help("Match terminals and character ranges ignoring case")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Execution fuel limit")
}

/// Rule nesting limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("512")
        .value_parser(value_parser!(u32))
        .help("Maximum rule nesting depth")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(value_parser!(ColorChoice))
        .help("Colorize output")
}
