//! Errors that abort grammar compilation.

use combinate_core::{GrammarNode, Identifier, Rule};

/// A grammar that cannot be turned into a registry.
///
/// Compilation stops at the first error; no partial registry is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The rule's identifier is already taken, by an earlier rule or by a
    /// predefined parser.
    #[error("{message}")]
    DuplicateRule { rule: Rule, message: String },

    /// An identifier names neither a rule nor a predefined parser.
    #[error("unresolved identifier `{identifier}`")]
    UnresolvedIdentifier { identifier: Identifier },

    /// A range bound is not a single character, or the bounds are reversed.
    #[error("invalid range bound `{token}`: {message}")]
    InvalidRangeBound { token: GrammarNode, message: String },
}

impl CompileError {
    pub(crate) fn unresolved(name: &str) -> Self {
        Self::UnresolvedIdentifier {
            identifier: Identifier::new(name),
        }
    }

    pub(crate) fn invalid_range_bound(token: &GrammarNode, message: impl Into<String>) -> Self {
        Self::InvalidRangeBound {
            token: token.clone(),
            message: message.into(),
        }
    }
}
