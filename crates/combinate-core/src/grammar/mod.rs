//! Grammar token model for EBNF grammars.
//!
//! A [`Grammar`] is a list of [`Rule`]s, each binding an identifier to a
//! [`GrammarNode`] expression tree. Trees are built in code through the
//! functions in [`build`] or loaded from JSON, and render back to EBNF text
//! through `Display`.

pub mod build;
mod display;
mod json;
mod types;

#[cfg(test)]
mod json_tests;

pub use json::GrammarError;
pub use types::{
    Alternative, Concatenation, Exception, Grammar, GrammarNode, Group, Identifier, Optional,
    Range, Repeated, Rule, Terminal,
};
