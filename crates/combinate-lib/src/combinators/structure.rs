//! Structural combinators: sequence, alternatives, optional, repetition, exception.
//!
//! Optional and repeated parsers never fail on their own account: absence
//! yields `Empty`. A sequence therefore needs no special handling for
//! optional or repeated members; it simply leaves their `Empty` tokens out.

use std::fmt;
use std::sync::Arc;

use super::{Parser, ParserRef, write_operand};
use crate::engine::ParseContext;
use crate::text::{Span, TextCursor};
use crate::token::ParserToken;

/// All parts, in order.
pub fn sequence(parts: Vec<ParserRef>) -> ParserRef {
    Arc::new(SequenceParser { parts })
}

/// First choice that matches, in order.
pub fn alternatives(choices: Vec<ParserRef>) -> ParserRef {
    Arc::new(AlternativesParser { choices })
}

/// Zero or one.
pub fn optional(inner: ParserRef) -> ParserRef {
    Arc::new(OptionalParser { inner })
}

/// Zero or more, greedy.
pub fn repeated(inner: ParserRef) -> ParserRef {
    Arc::new(RepeatedParser { inner })
}

/// `base`, unless `excluded` matches at the same position.
pub fn exception(base: ParserRef, excluded: ParserRef) -> ParserRef {
    Arc::new(ExceptionParser { base, excluded })
}

struct SequenceParser {
    parts: Vec<ParserRef>,
}

impl Parser for SequenceParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        let mut tokens = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            match part.parse(cursor, ctx) {
                Some(token) => tokens.push(token),
                None => {
                    cursor.restore(start);
                    return None;
                }
            }
        }
        Some(ParserToken::collect(
            tokens,
            cursor.span_from(start),
            |tokens, span| ParserToken::Sequence { tokens, span },
        ))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_operand(f, &**part, 2)?;
        }
        Ok(())
    }

    fn precedence(&self) -> u8 {
        1
    }
}

struct AlternativesParser {
    choices: Vec<ParserRef>,
}

impl Parser for AlternativesParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        for (i, choice) in self.choices.iter().enumerate() {
            if let Some(token) = choice.parse(cursor, ctx) {
                return Some(token);
            }
            if ctx.is_aborted() {
                return None;
            }
            if i + 1 < self.choices.len() {
                ctx.tracer().trace_backtrack(start);
            }
        }
        None
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, choice) in self.choices.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write_operand(f, &**choice, 1)?;
        }
        Ok(())
    }

    fn precedence(&self) -> u8 {
        0
    }
}

struct OptionalParser {
    inner: ParserRef,
}

impl Parser for OptionalParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        match self.inner.parse(cursor, ctx) {
            Some(token) => Some(token),
            None if ctx.is_aborted() => None,
            None => Some(ParserToken::Empty {
                span: Span::empty(start),
            }),
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        self.inner.describe(f)?;
        f.write_str("]")
    }
}

struct RepeatedParser {
    inner: ParserRef,
}

impl Parser for RepeatedParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        let mut tokens = Vec::new();
        loop {
            let before = cursor.offset();
            match self.inner.parse(cursor, ctx) {
                // A match that consumed nothing would repeat forever.
                Some(_) if cursor.offset() == before => break,
                Some(token) => tokens.push(token),
                None if ctx.is_aborted() => return None,
                None => break,
            }
        }
        Some(ParserToken::collect(
            tokens,
            cursor.span_from(start),
            |tokens, span| ParserToken::Repeated { tokens, span },
        ))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        self.inner.describe(f)?;
        f.write_str("}")
    }
}

struct ExceptionParser {
    base: ParserRef,
    excluded: ParserRef,
}

impl Parser for ExceptionParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        if self.excluded.parse(cursor, ctx).is_some() {
            cursor.restore(start);
            return None;
        }
        if ctx.is_aborted() {
            return None;
        }
        self.base.parse(cursor, ctx)
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_operand(f, &*self.base, 3)?;
        f.write_str(" - ")?;
        write_operand(f, &*self.excluded, 3)
    }

    fn precedence(&self) -> u8 {
        2
    }
}
