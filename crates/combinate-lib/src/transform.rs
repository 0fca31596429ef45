//! Syntax-tree transformers: the customization point of compilation.
//!
//! For every grammar node the compiler first builds the default parser for
//! that node kind, then hands node and parser to the transformer, and
//! installs whatever parser comes back. Every method defaults to returning
//! the parser unchanged, so an implementation overrides only the node kinds
//! it cares about.
//!
//! ```
//! use combinate_core::Terminal;
//! use combinate_lib::combinators::{self, ParserRef};
//! use combinate_lib::Transformer;
//!
//! /// Terminals made only of digits parse as numbers.
//! struct Digits;
//!
//! impl Transformer for Digits {
//!     fn terminal(&self, node: &Terminal, parser: ParserRef) -> ParserRef {
//!         if node.value.chars().all(|c| c.is_ascii_digit()) {
//!             combinators::number(parser)
//!         } else {
//!             parser
//!         }
//!     }
//! }
//! ```

use combinate_core::{
    Alternative, Concatenation, Exception, Group, Identifier, Optional, Range, Repeated, Rule,
    Terminal,
};

use crate::combinators::{self, ParserRef};

pub trait Transformer {
    fn terminal(&self, _node: &Terminal, parser: ParserRef) -> ParserRef {
        parser
    }

    /// `parser` is a deferred reference to the named rule.
    fn identifier(&self, _node: &Identifier, parser: ParserRef) -> ParserRef {
        parser
    }

    fn range(&self, _node: &Range, parser: ParserRef) -> ParserRef {
        parser
    }

    fn concatenation(&self, _node: &Concatenation, parser: ParserRef) -> ParserRef {
        parser
    }

    fn alternative(&self, _node: &Alternative, parser: ParserRef) -> ParserRef {
        parser
    }

    fn optional(&self, _node: &Optional, parser: ParserRef) -> ParserRef {
        parser
    }

    fn repeated(&self, _node: &Repeated, parser: ParserRef) -> ParserRef {
        parser
    }

    fn exception(&self, _node: &Exception, parser: ParserRef) -> ParserRef {
        parser
    }

    /// `parser` is the child's parser; groups add no combinator of their own.
    fn group(&self, _node: &Group, parser: ParserRef) -> ParserRef {
        parser
    }

    /// The returned parser is what the registry holds for this rule.
    fn rule(&self, _node: &Rule, parser: ParserRef) -> ParserRef {
        parser
    }
}

/// Installs every default parser unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityTransformer;

impl Transformer for IdentityTransformer {}

/// Tags each rule's token with the rule name.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleNamingTransformer;

impl Transformer for RuleNamingTransformer {
    fn rule(&self, node: &Rule, parser: ParserRef) -> ParserRef {
        combinators::named(node.name(), parser)
    }
}
