//! Combinators that reshape another parser's result.
//!
//! These are the building blocks transformers reach for: drop a token,
//! convert it to a number, tolerate leading whitespace.

use std::fmt;
use std::sync::Arc;

use super::{Parser, ParserRef};
use crate::engine::ParseContext;
use crate::text::TextCursor;
use crate::token::ParserToken;

/// Post-processing step: the token and the text it covers.
/// Returning `None` turns the match into a non-match.
type MapFn = dyn Fn(ParserToken, &str) -> Option<ParserToken> + Send + Sync;

/// Rewrite the token of a successful match.
pub fn map(
    inner: ParserRef,
    f: impl Fn(ParserToken, &str) -> Option<ParserToken> + Send + Sync + 'static,
) -> ParserRef {
    Arc::new(MapParser {
        inner,
        f: Box::new(f),
    })
}

/// Consume whatever `inner` matches but contribute no token.
pub fn ignore(inner: ParserRef) -> ParserRef {
    map(inner, |token, _| {
        Some(ParserToken::Empty {
            span: token.span(),
        })
    })
}

/// Read the matched text as a decimal `i64`.
pub fn number(inner: ParserRef) -> ParserRef {
    map(inner, |token, text| {
        let value = text.parse().ok()?;
        Some(ParserToken::Number {
            value,
            span: token.span(),
        })
    })
}

/// Skip leading whitespace, then run `inner`.
pub fn skip_whitespace(inner: ParserRef) -> ParserRef {
    Arc::new(SkipWhitespaceParser { inner })
}

struct MapParser {
    inner: ParserRef,
    f: Box<MapFn>,
}

impl Parser for MapParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        let token = self.inner.parse(cursor, ctx)?;
        let text = cursor.slice(token.span());
        let mapped = (self.f)(token, text);
        if mapped.is_none() {
            cursor.restore(start);
        }
        mapped
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.describe(f)
    }

    fn precedence(&self) -> u8 {
        self.inner.precedence()
    }
}

struct SkipWhitespaceParser {
    inner: ParserRef,
}

impl Parser for SkipWhitespaceParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        while cursor.peek_char().is_some_and(char::is_whitespace) {
            cursor.next_char();
        }
        let token = self.inner.parse(cursor, ctx);
        if token.is_none() {
            cursor.restore(start);
        }
        token
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.describe(f)
    }

    fn precedence(&self) -> u8 {
        self.inner.precedence()
    }
}
