//! Tracing infrastructure for debugging parses.
//!
//! `NoopTracer` compiles down to nothing: every method is an empty
//! `#[inline(always)]` function. `PrintTracer` collects one line per event,
//! indented by rule depth, for display after the parse.
//!
//! Depth is tracer-owned state: the tracer counts enter/exit pairs itself, so
//! the parse context carries nothing that exists only for display.

use combinate_core::Colors;

use crate::combinators::Parser;
use crate::text::Span;
use crate::token::ParserToken;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Rule enter and exit only.
    #[default]
    Default,
    /// Also terminal matches, failures and backtracking.
    Verbose,
    /// Also the upcoming input on each rule entry.
    VeryVerbose,
}

/// Parse instrumentation.
///
/// - `trace_enter_rule` - before a rule body runs
/// - `trace_exit_rule` - after it returns, with its token on success
/// - `trace_match` - a leaf parser consumed text
/// - `trace_failure` - a leaf parser did not match
/// - `trace_backtrack` - an alternative moves on to its next choice
pub trait Tracer {
    fn trace_enter_rule(&mut self, name: &str, offset: usize, rest: &str);

    fn trace_exit_rule(&mut self, name: &str, offset: usize, result: Option<&ParserToken>);

    fn trace_match(&mut self, parser: &dyn Parser, span: Span, text: &str);

    fn trace_failure(&mut self, parser: &dyn Parser, offset: usize);

    fn trace_backtrack(&mut self, offset: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter_rule(&mut self, _name: &str, _offset: usize, _rest: &str) {}

    #[inline(always)]
    fn trace_exit_rule(&mut self, _name: &str, _offset: usize, _result: Option<&ParserToken>) {}

    #[inline(always)]
    fn trace_match(&mut self, _parser: &dyn Parser, _span: Span, _text: &str) {}

    #[inline(always)]
    fn trace_failure(&mut self, _parser: &dyn Parser, _offset: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _offset: usize) {}
}

const EXCERPT_CHARS: usize = 16;

/// Tracer that collects a readable execution log.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    depth: usize,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
            depth: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print collected lines to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    fn verbose(&self) -> bool {
        self.verbosity != Verbosity::Default
    }

    fn push(&mut self, line: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{line}"));
    }
}

fn excerpt(rest: &str) -> String {
    let mut s: String = rest.chars().take(EXCERPT_CHARS).collect();
    if rest.chars().nth(EXCERPT_CHARS).is_some() {
        s.push('…');
    }
    s
}

impl Tracer for PrintTracer {
    fn trace_enter_rule(&mut self, name: &str, offset: usize, rest: &str) {
        let Colors {
            blue, dim, reset, ..
        } = self.colors;
        let mut line = format!("{blue}{name}{reset} {dim}@{offset}{reset}");
        if self.verbosity == Verbosity::VeryVerbose {
            line.push_str(&format!(" {dim}{:?}{reset}", excerpt(rest)));
        }
        self.push(line);
        self.depth += 1;
    }

    fn trace_exit_rule(&mut self, name: &str, offset: usize, result: Option<&ParserToken>) {
        let Colors {
            blue,
            green,
            red,
            dim,
            reset,
        } = self.colors;
        self.depth = self.depth.saturating_sub(1);
        let line = match result {
            Some(token) => format!(
                "{blue}{name}{reset} {green}matched{reset} {dim}{}{reset}",
                token.span()
            ),
            None => format!("{blue}{name}{reset} {red}failed{reset} {dim}@{offset}{reset}"),
        };
        self.push(line);
    }

    fn trace_match(&mut self, parser: &dyn Parser, span: Span, text: &str) {
        if !self.verbose() {
            return;
        }
        let Colors {
            green, dim, reset, ..
        } = self.colors;
        self.push(format!("{parser} {green}{text:?}{reset} {dim}{span}{reset}"));
    }

    fn trace_failure(&mut self, parser: &dyn Parser, offset: usize) {
        if !self.verbose() {
            return;
        }
        let Colors {
            red, dim, reset, ..
        } = self.colors;
        self.push(format!("{parser} {red}no match{reset} {dim}@{offset}{reset}"));
    }

    fn trace_backtrack(&mut self, offset: usize) {
        if !self.verbose() {
            return;
        }
        let Colors { dim, reset, .. } = self.colors;
        self.push(format!("{dim}backtrack @{offset}{reset}"));
    }
}
