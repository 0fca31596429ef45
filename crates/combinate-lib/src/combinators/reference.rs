//! Rule references and rule-named tokens.

use std::fmt;
use std::sync::Arc;

use super::{Parser, ParserRef};
use crate::engine::{ParseContext, RuntimeError};
use crate::text::TextCursor;
use crate::token::ParserToken;

/// Reference to the rule `name`, resolved when it runs.
///
/// The reference holds the name only. The target parser is looked up in the
/// registry of the current parse on every invocation, so rules can refer to
/// themselves or to rules compiled after them without any pointer cycle.
pub fn rule_ref(name: impl Into<String>) -> ParserRef {
    Arc::new(RuleRef::new(name))
}

/// Wraps the token of `inner` in [`ParserToken::Rule`].
pub fn named(name: impl Into<String>, inner: ParserRef) -> ParserRef {
    Arc::new(NamedParser {
        name: name.into(),
        inner,
    })
}

pub(crate) struct RuleRef {
    name: String,
}

impl RuleRef {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Parser for RuleRef {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let Some(target) = ctx.resolve(&self.name) else {
            ctx.abort(RuntimeError::UnresolvedIdentifier(self.name.clone()));
            return None;
        };
        if !ctx.enter_rule() {
            return None;
        }

        let start = cursor.offset();
        ctx.tracer().trace_enter_rule(&self.name, start, cursor.rest());
        let result = target.parse(cursor, ctx);
        ctx.tracer().trace_exit_rule(&self.name, start, result.as_ref());
        ctx.exit_rule();
        result
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

struct NamedParser {
    name: String,
    inner: ParserRef,
}

impl Parser for NamedParser {
    fn parse(
        &self,
        cursor: &mut TextCursor<'_>,
        ctx: &mut ParseContext<'_>,
    ) -> Option<ParserToken> {
        if !ctx.consume_fuel() {
            return None;
        }
        let token = self.inner.parse(cursor, ctx)?;
        let span = token.span();
        Some(ParserToken::Rule {
            name: self.name.clone(),
            token: Box::new(token),
            span,
        })
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.describe(f)
    }

    fn precedence(&self) -> u8 {
        self.inner.precedence()
    }
}
