#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for combinate: the EBNF grammar token model.
//!
//! Grammars are produced elsewhere (built in code, or loaded from JSON) and
//! consumed by the compiler in `combinate-lib`, which turns every rule into a
//! runnable parser.

pub mod colors;
pub mod grammar;

pub use colors::Colors;
pub use grammar::{
    Alternative, Concatenation, Exception, Grammar, GrammarError, GrammarNode, Group, Identifier,
    Optional, Range, Repeated, Rule, Terminal,
};
