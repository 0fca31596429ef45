//! Match results.
//!
//! A successful parse yields a [`ParserToken`] tree. Failing to match is not
//! represented here: parsers return `None` instead.

use std::fmt;

use serde::Serialize;

use crate::text::Span;

/// Token produced by a successful match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParserToken {
    /// Terminal text, as found in the input.
    Text { text: String, span: Span },
    /// Single character from a range or character class.
    Char { value: char, span: Span },
    /// Concatenation; lists only the children that produced a token.
    Sequence { tokens: Vec<ParserToken>, span: Span },
    /// One or more repetitions.
    Repeated { tokens: Vec<ParserToken>, span: Span },
    /// Token tagged with the rule that produced it.
    Rule {
        name: String,
        token: Box<ParserToken>,
        span: Span,
    },
    /// Text converted to an integer.
    Number { value: i64, span: Span },
    /// Successful match without a token: an absent optional, zero
    /// repetitions, or text a transformer chose to drop.
    Empty { span: Span },
}

impl ParserToken {
    pub fn span(&self) -> Span {
        match self {
            ParserToken::Text { span, .. }
            | ParserToken::Char { span, .. }
            | ParserToken::Sequence { span, .. }
            | ParserToken::Repeated { span, .. }
            | ParserToken::Rule { span, .. }
            | ParserToken::Number { span, .. }
            | ParserToken::Empty { span } => *span,
        }
    }

    /// The input text this token covers.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span().range()]
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ParserToken::Empty { .. })
    }

    /// Child tokens of sequences, repetitions and rule tokens.
    pub fn children(&self) -> &[ParserToken] {
        match self {
            ParserToken::Sequence { tokens, .. } | ParserToken::Repeated { tokens, .. } => tokens,
            ParserToken::Rule { token, .. } => std::slice::from_ref(&**token),
            _ => &[],
        }
    }

    /// Builds a sequence or repetition from collected children.
    ///
    /// `Empty` children are dropped; when nothing remains the result is a
    /// single `Empty` covering `span`, since whatever was consumed carried
    /// no token.
    pub(crate) fn collect(
        tokens: Vec<ParserToken>,
        span: Span,
        build: fn(Vec<ParserToken>, Span) -> ParserToken,
    ) -> ParserToken {
        let tokens: Vec<_> = tokens.into_iter().filter(|t| !t.is_empty()).collect();
        if tokens.is_empty() {
            ParserToken::Empty { span }
        } else {
            build(tokens, span)
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            ParserToken::Text { text, span } => writeln!(f, "{indent}Text {text:?} {span}"),
            ParserToken::Char { value, span } => writeln!(f, "{indent}Char {value:?} {span}"),
            ParserToken::Number { value, span } => writeln!(f, "{indent}Number {value} {span}"),
            ParserToken::Empty { span } => writeln!(f, "{indent}Empty {span}"),
            ParserToken::Sequence { tokens, span } => {
                writeln!(f, "{indent}Sequence {span}")?;
                tokens.iter().try_for_each(|t| t.write_tree(f, depth + 1))
            }
            ParserToken::Repeated { tokens, span } => {
                writeln!(f, "{indent}Repeated {span}")?;
                tokens.iter().try_for_each(|t| t.write_tree(f, depth + 1))
            }
            ParserToken::Rule { name, token, span } => {
                writeln!(f, "{indent}Rule {name} {span}")?;
                token.write_tree(f, depth + 1)
            }
        }
    }
}

/// Indented tree, one token per line.
impl fmt::Display for ParserToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
