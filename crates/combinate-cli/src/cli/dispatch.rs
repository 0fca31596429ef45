//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs are populated from clap matches
//! - `Into<*Args>` impls bridge dispatch → command handlers
//! - `-g` shifts a lone positional from grammar to source

use std::path::PathBuf;

use clap::ArgMatches;
use combinate_lib::{CaseSensitivity, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::run_common::{GrammarInput, RunInput};
use crate::commands::trace::TraceArgs;

pub struct GrammarParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub case_insensitive: bool,
}

impl GrammarParams {
    fn from_matches(m: &ArgMatches, grammar_path: Option<PathBuf>) -> Self {
        Self {
            grammar_path,
            grammar_text: m.get_one::<String>("grammar_text").cloned(),
            case_insensitive: m.get_flag("case_insensitive"),
        }
    }
}

impl From<GrammarParams> for GrammarInput {
    fn from(p: GrammarParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            case_sensitivity: if p.case_insensitive {
                CaseSensitivity::Insensitive
            } else {
                CaseSensitivity::Sensitive
            },
        }
    }
}

pub struct RunParams {
    pub grammar: GrammarParams,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub rule: Option<String>,
    pub fuel: u32,
    pub recursion_limit: u32,
}

impl RunParams {
    fn from_matches(m: &ArgMatches) -> Self {
        let grammar_path = m.get_one::<PathBuf>("grammar_path").cloned();
        let source_path = m.get_one::<PathBuf>("source_path").cloned();
        let has_grammar_text = m.contains_id("grammar_text");

        let (grammar_path, source_path) =
            shift_positional_to_source(has_grammar_text, grammar_path, source_path);

        Self {
            grammar: GrammarParams::from_matches(m, grammar_path),
            source_path,
            source_text: m.get_one::<String>("source_text").cloned(),
            rule: m.get_one::<String>("rule").cloned(),
            fuel: m.get_one::<u32>("fuel").copied().unwrap_or(1_000_000),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied().unwrap_or(512),
        }
    }
}

impl From<RunParams> for RunInput {
    fn from(p: RunParams) -> Self {
        Self {
            grammar: p.grammar.into(),
            source_path: p.source_path,
            source_text: p.source_text,
            rule: p.rule,
            fuel: p.fuel,
            recursion_limit: p.recursion_limit,
        }
    }
}

pub struct CheckParams {
    pub grammar: GrammarParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let grammar_path = m.get_one::<PathBuf>("grammar_path").cloned();
        Self {
            grammar: GrammarParams::from_matches(m, grammar_path),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            grammar: p.grammar.into(),
        }
    }
}

pub struct DumpParams {
    pub grammar: GrammarParams,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let grammar_path = m.get_one::<PathBuf>("grammar_path").cloned();
        Self {
            grammar: GrammarParams::from_matches(m, grammar_path),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            grammar: p.grammar.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub run: RunParams,
    pub compact: bool,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            run: RunParams::from_matches(m),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            run: p.run.into(),
            pretty,
        }
    }
}

pub struct TraceParams {
    pub run: RunParams,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            run: RunParams::from_matches(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            run: p.run.into(),
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    m.get_one::<ColorChoice>("color").copied().unwrap_or_default()
}

/// When -g is used with a single positional arg, shift it from grammar to source.
/// This enables: `combinate exec -g '{...}' input.txt`
fn shift_positional_to_source(
    has_grammar_text: bool,
    grammar_path: Option<PathBuf>,
    source_path: Option<PathBuf>,
) -> (Option<PathBuf>, Option<PathBuf>) {
    if has_grammar_text && grammar_path.is_some() && source_path.is_none() {
        (None, grammar_path)
    } else {
        (grammar_path, source_path)
    }
}
