//! Compiled parsers by rule name.

use std::fmt;

use indexmap::IndexMap;

use crate::combinators::{Parser, ParserRef, RuleRef};
use crate::compile::CompileError;
use crate::engine::{NoopTracer, ParseContext, ParseLimits, RuntimeError, Tracer};
use crate::text::TextCursor;
use crate::token::ParserToken;

/// The result of compiling a grammar: one parser per rule plus every
/// predefined parser, in that order of insertion (predefined first).
///
/// A registry never changes after compilation. Identifier references inside
/// its parsers resolve against it when they run, so it can be shared
/// across threads and cloned cheaply.
#[derive(Clone)]
pub struct Registry {
    parsers: IndexMap<String, ParserRef>,
    limits: ParseLimits,
}

impl Registry {
    pub(crate) fn new(parsers: IndexMap<String, ParserRef>, limits: ParseLimits) -> Self {
        Self { parsers, limits }
    }

    /// Parser registered under `name`.
    pub fn get(&self, name: &str) -> Result<&ParserRef, CompileError> {
        self.lookup(name).ok_or_else(|| CompileError::unresolved(name))
    }

    /// Parser registered under `name`, or `fallback` when there is none.
    pub fn get_or_default(&self, name: &str, fallback: ParserRef) -> ParserRef {
        self.lookup(name).cloned().unwrap_or(fallback)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParserRef)> {
        self.parsers.iter().map(|(name, parser)| (name.as_str(), parser))
    }

    pub fn limits(&self) -> ParseLimits {
        self.limits
    }

    /// Set execution fuel limit for subsequent parses. None = infinite.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.limits.exec_fuel = limit;
        self
    }

    /// Set recursion depth limit for subsequent parses. None = infinite.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.limits.recursion_fuel = limit;
        self
    }

    /// Match rule `name` at the start of `text`.
    ///
    /// The match need not cover the whole text. `Ok(None)` is an ordinary
    /// non-match; `Err` means the parse was aborted.
    pub fn parse(&self, name: &str, text: &str) -> Result<Option<ParserToken>, RuntimeError> {
        self.parse_with(name, text, &mut NoopTracer)
    }

    /// [`parse`](Self::parse), reporting every step to `tracer`.
    pub fn parse_with(
        &self,
        name: &str,
        text: &str,
        tracer: &mut dyn Tracer,
    ) -> Result<Option<ParserToken>, RuntimeError> {
        if !self.contains(name) {
            return Err(RuntimeError::UnresolvedIdentifier(name.to_owned()));
        }
        let mut cursor = TextCursor::new(text);
        let mut ctx = ParseContext::new(self, tracer);
        let token = RuleRef::new(name).parse(&mut cursor, &mut ctx);
        ctx.finish()?;
        Ok(token)
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&ParserRef> {
        self.parsers.get(name)
    }
}

/// One `NAME = description;` line per parser.
impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, parser) in &self.parsers {
            writeln!(f, "{name} = {parser};")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.parsers.keys().collect::<Vec<_>>())
            .field("limits", &self.limits)
            .finish()
    }
}
