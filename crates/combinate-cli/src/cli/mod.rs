//! Argument parsing: flag builders, subcommands, and conversion of matches
//! into the arguments each command runs with.

mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

use std::io::IsTerminal;

use clap::ValueEnum;

pub use commands::build_cli;
pub use dispatch::{CheckParams, DumpParams, ExecParams, TraceParams};

/// `--color` setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `Auto` colors only an interactive session: trace lines go to stderr
    /// and results to stdout, so a redirect of either turns colors off.
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
            }
        }
    }
}
