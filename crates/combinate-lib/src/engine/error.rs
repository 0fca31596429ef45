//! Errors that abort a parse.
//!
//! Ordinary mismatches are not errors; these are the conditions under which
//! a parse cannot produce a trustworthy answer at all.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many parser invocations).
    #[error("runtime execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (rule calls nested too deeply, typically
    /// a left-recursive rule).
    #[error("runtime recursion limit exceeded")]
    RecursionLimitExceeded,

    /// A rule reference that names no rule in the registry.
    #[error("unresolved identifier `{0}`")]
    UnresolvedIdentifier(String),
}
