//! Leaf parsers: literal text, character classes, regular expressions.

use std::fmt;
use std::sync::Arc;

use combinate_core::Terminal;
use regex_automata::meta::{BuildError, Regex};
use regex_automata::{Anchored, Input};

use super::{CaseSensitivity, Parser, ParserRef};
use crate::engine::ParseContext;
use crate::text::TextCursor;
use crate::token::ParserToken;

/// Literal text.
pub fn string(text: impl Into<String>, case: CaseSensitivity) -> ParserRef {
    Arc::new(StringParser {
        terminal: Terminal { value: text.into() },
        case,
    })
}

/// One character in `from..=to`.
///
/// Insensitive ranges also accept a character whose lower or upper case
/// falls in the range, so `"a".."z"` matches `Q`.
pub fn char_range(from: char, to: char, case: CaseSensitivity) -> ParserRef {
    Arc::new(CharRangeParser { from, to, case })
}

/// One character satisfying `predicate`.
pub fn char_matching(name: impl Into<String>, predicate: fn(char) -> bool) -> ParserRef {
    Arc::new(CharPredicateParser {
        name: name.into(),
        predicate,
        repeat: false,
    })
}

/// One or more characters satisfying `predicate`, as a single text token.
pub fn chars_matching(name: impl Into<String>, predicate: fn(char) -> bool) -> ParserRef {
    Arc::new(CharPredicateParser {
        name: name.into(),
        predicate,
        repeat: true,
    })
}

/// Non-empty match of a regular expression anchored at the cursor.
pub fn pattern(name: impl Into<String>, regex: &str) -> Result<ParserRef, BuildError> {
    Ok(Arc::new(PatternParser {
        name: name.into(),
        regex: Regex::new(regex)?,
    }))
}

struct StringParser {
    terminal: Terminal,
    case: CaseSensitivity,
}

impl StringParser {
    /// Length in bytes of the input prefix equal to the terminal.
    fn match_len(&self, rest: &str) -> Option<usize> {
        let expected = &self.terminal.value;
        match self.case {
            CaseSensitivity::Sensitive => {
                rest.starts_with(expected.as_str()).then(|| expected.len())
            }
            CaseSensitivity::Insensitive => {
                let mut input = rest.chars();
                let mut len = 0;
                for e in expected.chars() {
                    let c = input.next()?;
                    if c != e && !c.to_lowercase().eq(e.to_lowercase()) {
                        return None;
                    }
                    len += c.len_utf8();
                }
                Some(len)
            }
        }
    }
}

impl Parser for StringParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        let Some(len) = self.match_len(cursor.rest()) else {
            ctx.tracer().trace_failure(self, start);
            return None;
        };
        cursor.advance(len);
        let span = cursor.span_from(start);
        let text = cursor.slice(span);
        ctx.tracer().trace_match(self, span, text);
        Some(ParserToken::Text {
            text: text.to_owned(),
            span,
        })
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terminal)
    }
}

struct CharRangeParser {
    from: char,
    to: char,
    case: CaseSensitivity,
}

impl CharRangeParser {
    fn accepts(&self, c: char) -> bool {
        let range = self.from..=self.to;
        if range.contains(&c) {
            return true;
        }
        match self.case {
            CaseSensitivity::Sensitive => false,
            CaseSensitivity::Insensitive => {
                c.to_lowercase().any(|l| range.contains(&l))
                    || c.to_uppercase().any(|u| range.contains(&u))
            }
        }
    }
}

impl Parser for CharRangeParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        match cursor.peek_char() {
            Some(c) if self.accepts(c) => {
                cursor.next_char();
                let span = cursor.span_from(start);
                ctx.tracer().trace_match(self, span, cursor.slice(span));
                Some(ParserToken::Char { value: c, span })
            }
            _ => {
                ctx.tracer().trace_failure(self, start);
                None
            }
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = Terminal {
            value: self.from.to_string(),
        };
        let to = Terminal {
            value: self.to.to_string(),
        };
        write!(f, "{from}..{to}")
    }
}

struct CharPredicateParser {
    name: String,
    predicate: fn(char) -> bool,
    repeat: bool,
}

impl Parser for CharPredicateParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        let Some(first) = cursor.peek_char().filter(|&c| (self.predicate)(c)) else {
            ctx.tracer().trace_failure(self, start);
            return None;
        };
        cursor.next_char();
        if self.repeat {
            while cursor.peek_char().is_some_and(self.predicate) {
                cursor.next_char();
            }
        }

        let span = cursor.span_from(start);
        let text = cursor.slice(span);
        ctx.tracer().trace_match(self, span, text);
        if self.repeat {
            Some(ParserToken::Text {
                text: text.to_owned(),
                span,
            })
        } else {
            Some(ParserToken::Char { value: first, span })
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}

struct PatternParser {
    name: String,
    regex: Regex,
}

impl Parser for PatternParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let start = cursor.offset();
        let input = Input::new(cursor.text())
            .range(start..)
            .anchored(Anchored::Yes);
        let end = match self.regex.find(input) {
            Some(m) if !m.is_empty() => m.end(),
            _ => {
                ctx.tracer().trace_failure(self, start);
                return None;
            }
        };

        cursor.advance(end - start);
        let span = cursor.span_from(start);
        let text = cursor.slice(span);
        ctx.tracer().trace_match(self, span, text);
        Some(ParserToken::Text {
            text: text.to_owned(),
            span,
        })
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}
