//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Positional shifting: -g shifts the lone positional to source
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Flags stay with the commands that use them

use std::path::PathBuf;

use clap::ArgMatches;
use combinate_lib::{CaseSensitivity, Verbosity};

use super::*;
use crate::cli::commands::{check_command, dump_command, exec_command, trace_command};
use crate::commands::run_common::GrammarInput;
use crate::commands::trace::TraceArgs;

#[track_caller]
fn matches(cmd: clap::Command, args: &[&str]) -> ArgMatches {
    match cmd.try_get_matches_from(args.iter().copied()) {
        Ok(m) => m,
        Err(e) => panic!("expected {args:?} to parse: {e}"),
    }
}

#[test]
fn exec_grammar_and_source_positionals() {
    let m = matches(exec_command(), &["exec", "grammar.json", "input.txt"]);
    let params = ExecParams::from_matches(&m);

    assert_eq!(
        params.run.grammar.grammar_path,
        Some(PathBuf::from("grammar.json"))
    );
    assert_eq!(params.run.source_path, Some(PathBuf::from("input.txt")));
    assert_eq!(params.run.rule, None);
    assert!(!params.compact);
}

#[test]
fn exec_inline_grammar_shifts_positional_to_source() {
    let m = matches(exec_command(), &["exec", "-g", "{}", "input.txt"]);
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.run.grammar.grammar_path, None);
    assert_eq!(params.run.grammar.grammar_text.as_deref(), Some("{}"));
    assert_eq!(params.run.source_path, Some(PathBuf::from("input.txt")));
}

#[test]
fn exec_inline_grammar_and_text() {
    let m = matches(
        exec_command(),
        &["exec", "-g", "{}", "-s", "abc", "-r", "TEST", "--compact"],
    );
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.run.grammar.grammar_path, None);
    assert_eq!(params.run.source_path, None);
    assert_eq!(params.run.source_text.as_deref(), Some("abc"));
    assert_eq!(params.run.rule.as_deref(), Some("TEST"));
    assert!(params.compact);
}

#[test]
fn run_limits_default_and_override() {
    let m = matches(exec_command(), &["exec", "grammar.json", "-s", "x"]);
    let params = ExecParams::from_matches(&m);
    assert_eq!(params.run.fuel, 1_000_000);
    assert_eq!(params.run.recursion_limit, 512);

    let m = matches(
        trace_command(),
        &[
            "trace",
            "grammar.json",
            "-s",
            "x",
            "--fuel",
            "50",
            "--recursion-limit",
            "8",
        ],
    );
    let params = TraceParams::from_matches(&m);
    assert_eq!(params.run.fuel, 50);
    assert_eq!(params.run.recursion_limit, 8);
}

#[test]
fn case_insensitive_flag() {
    let m = matches(check_command(), &["check", "grammar.json", "-i"]);
    let params = CheckParams::from_matches(&m);
    assert!(params.grammar.case_insensitive);

    let input = GrammarInput::from(params.grammar);
    assert_eq!(input.case_sensitivity, CaseSensitivity::Insensitive);
}

#[test]
fn trace_verbosity_levels() {
    let cases = [
        (vec![], Verbosity::Default),
        (vec!["-v"], Verbosity::Verbose),
        (vec!["-vv"], Verbosity::VeryVerbose),
        (vec!["-vvv"], Verbosity::VeryVerbose),
    ];

    for (flags, expected) in cases {
        let mut args = vec!["trace", "grammar.json", "-s", "x", "--color", "never"];
        args.extend(flags);
        let m = matches(trace_command(), &args);
        let trace_args = TraceArgs::from(TraceParams::from_matches(&m));

        assert_eq!(trace_args.verbosity, expected, "args: {args:?}");
        assert!(!trace_args.color);
    }
}

#[test]
fn dump_color_choice() {
    let m = matches(dump_command(), &["dump", "grammar.json", "--color", "always"]);
    let params = DumpParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Always);

    let m = matches(dump_command(), &["dump", "grammar.json"]);
    let params = DumpParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_rejects_run_flags() {
    let result = check_command().try_get_matches_from(["check", "grammar.json", "-s", "abc"]);
    assert!(result.is_err(), "check should not accept -s");

    let result = check_command().try_get_matches_from(["check", "grammar.json", "input.txt"]);
    assert!(result.is_err(), "check should not accept a source positional");
}

#[test]
fn exec_rejects_trace_flags() {
    let result = exec_command().try_get_matches_from(["exec", "grammar.json", "-s", "x", "-v"]);
    assert!(result.is_err(), "exec should not accept -v");
}

#[test]
fn dump_help_hides_run_flags() {
    let help = dump_command().render_help().to_string();

    assert!(!help.contains("--fuel"), "dump help should not show --fuel");
    assert!(!help.contains("--rule"), "dump help should not show --rule");
    assert!(help.contains("--color"), "dump help should show --color");
}

#[test]
fn build_cli_has_all_subcommands() {
    let cli = build_cli();
    let names: Vec<_> = cli.get_subcommands().map(|c| c.get_name()).collect();

    assert_eq!(names, ["check", "dump", "exec", "trace"]);
}
