//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Add the grammar input args and compile options every command takes.
fn with_grammar_args(cmd: Command) -> Command {
    cmd.arg(grammar_path_arg())
        .arg(grammar_text_arg())
        .arg(case_insensitive_arg())
}

/// Add the args of commands that run a rule against text.
fn with_run_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg())
        .arg(source_text_arg())
        .arg(rule_arg())
        .arg(fuel_arg())
        .arg(recursion_limit_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("combinate")
        .about("Compile EBNF grammars into parsers and run them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Compile a grammar and report errors.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Compile a grammar and report errors")
        .override_usage(
            "\
  combinate check <GRAMMAR>
  combinate check -g <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  combinate check grammar.json          # silent when the grammar compiles
  cat grammar.json | combinate check -  # grammar from stdin"#,
        );

    with_grammar_args(cmd)
}

/// Show a grammar and its compiled parsers.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show a grammar as EBNF and its compiled parsers")
        .override_usage(
            "\
  combinate dump <GRAMMAR>
  combinate dump -g <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  combinate dump grammar.json
  combinate dump grammar.json --color always | less -R"#,
        )
        .arg(color_arg());

    with_grammar_args(cmd)
}

/// Parse text with a grammar rule and output JSON.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Parse text with a grammar rule and output the token tree as JSON")
        .override_usage(
            "\
  combinate exec <GRAMMAR> <SOURCE> [-r <NAME>]
  combinate exec <GRAMMAR> -s <TEXT> [-r <NAME>]
  combinate exec -g <JSON> -s <TEXT> [-r <NAME>]",
        )
        .after_help(
            r#"EXAMPLES:
  combinate exec grammar.json input.txt        # first rule of the grammar
  combinate exec grammar.json -s 'abc' -r TEST # inline text, explicit rule
  combinate exec -g '{...}' input.txt          # inline grammar + file"#,
        )
        .arg(compact_arg());

    with_run_args(with_grammar_args(cmd))
}

/// Trace a parse for debugging.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace a parse for debugging")
        .override_usage(
            "\
  combinate trace <GRAMMAR> <SOURCE> [-r <NAME>]
  combinate trace <GRAMMAR> -s <TEXT> [-r <NAME>]
  combinate trace -g <JSON> -s <TEXT> [-r <NAME>]",
        )
        .after_help(
            r#"EXAMPLES:
  combinate trace grammar.json -s 'abc'        # rule enter/exit
  combinate trace grammar.json -s 'abc' -v     # also terminals and backtracking
  combinate trace grammar.json -s 'abc' -vv    # also upcoming input"#,
        )
        .arg(verbose_arg())
        .arg(color_arg());

    with_run_args(with_grammar_args(cmd))
}
