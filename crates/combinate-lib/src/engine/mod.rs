//! Parse-time machinery shared by all combinators.

pub mod context;
pub mod error;
pub mod trace;

#[cfg(test)]
mod trace_tests;

pub use context::{DEFAULT_RECURSION_FUEL, ParseContext, ParseLimits};
pub use error::RuntimeError;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
