//! Parser combinator primitives.
//!
//! Every parser follows the same contract:
//! - On success it returns a token and leaves the cursor after the match.
//! - On failure it returns `None` and leaves the cursor where it found it.
//! - On entry it burns one unit of fuel, and fails once the context is aborted.
//!
//! The compiler builds its default parsers from these constructors, and
//! transformers and predefined parsers use the same ones.

mod adapt;
mod reference;
mod structure;
mod text;


use std::fmt;
use std::sync::Arc;

use crate::engine::ParseContext;
use crate::text::TextCursor;
use crate::token::ParserToken;

pub use adapt::{ignore, map, number, skip_whitespace};
pub use reference::{named, rule_ref};
pub(crate) use reference::RuleRef;
pub use structure::{alternatives, exception, optional, repeated, sequence};
pub use text::{char_matching, char_range, chars_matching, pattern, string};

/// A matcher over text.
///
/// Parsers are shared between rules and threads, so they hold no per-parse
/// state; everything mutable lives in the [`ParseContext`].
pub trait Parser: Send + Sync {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken>;

    /// EBNF-like description, used by `Display`, registry dumps and traces.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Binding strength of the description: 0 for alternatives, 1 for
    /// sequences, 2 for exceptions, 3 for everything self-delimiting.
    fn precedence(&self) -> u8 {
        3
    }
}

/// Shared handle to a compiled parser.
pub type ParserRef = Arc<dyn Parser>;

/// How terminals and character ranges compare against input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl fmt::Display for dyn Parser + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(f)
    }
}

impl fmt::Debug for dyn Parser + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(f)
    }
}

/// Describe `parser`, parenthesized when it binds looser than `min`.
fn write_operand(f: &mut fmt::Formatter<'_>, parser: &dyn Parser, min: u8) -> fmt::Result {
    if parser.precedence() < min {
        f.write_str("(")?;
        parser.describe(f)?;
        f.write_str(")")
    } else {
        parser.describe(f)
    }
}
