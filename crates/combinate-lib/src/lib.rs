//! Combinate: compiles EBNF grammars into parser combinators.
//!
//! # Example
//!
//! ```
//! use combinate_core::Grammar;
//! use combinate_core::grammar::build::{alt, rule, terminal};
//! use combinate_lib::IdentityTransformer;
//!
//! // TEST = "abc" | "xyz";
//! let grammar = Grammar::new("test", [rule("TEST", alt([terminal("abc"), terminal("xyz")]))]);
//!
//! let registry = combinate_lib::transform(&grammar, Default::default(), &IdentityTransformer)
//!     .expect("grammar compiles");
//! let token = registry.parse("TEST", "xyz").expect("parse runs to completion");
//! assert_eq!(token.map(|t| t.text("xyz").to_owned()), Some("xyz".to_owned()));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod combinators;
pub mod compile;
pub mod engine;
pub mod registry;
pub mod text;
pub mod token;
pub mod transform;


use combinate_core::Grammar;
use indexmap::IndexMap;

pub use combinators::{CaseSensitivity, Parser, ParserRef};
pub use compile::{CompileError, CompileOptions, Compiler};
pub use engine::{NoopTracer, PrintTracer, RuntimeError, Tracer, Verbosity};
pub use registry::Registry;
pub use text::{Span, TextCursor};
pub use token::ParserToken;
pub use transform::{IdentityTransformer, RuleNamingTransformer, Transformer};

/// Compile `grammar` with default options.
///
/// Shorthand for `Compiler::new(grammar).with_predefined(predefined).compile(transformer)`.
pub fn transform(
    grammar: &Grammar,
    predefined: IndexMap<String, ParserRef>,
    transformer: &dyn Transformer,
) -> Result<Registry, CompileError> {
    Compiler::new(grammar)
        .with_predefined(predefined)
        .compile(transformer)
}
