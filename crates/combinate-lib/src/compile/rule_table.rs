//! Rule table: rule definitions by name, duplicates rejected.
//!
//! Built once per compilation before any parser exists, so a duplicate
//! identifier never leaves a half-filled registry behind.

use combinate_core::{Grammar, Rule};
use indexmap::IndexMap;

use super::error::CompileError;
use crate::combinators::ParserRef;

/// Grammar rules in declaration order.
#[derive(Debug)]
pub(crate) struct RuleTable<'g> {
    rules: IndexMap<&'g str, &'g Rule>,
}

impl<'g> RuleTable<'g> {
    pub(crate) fn build(
        grammar: &'g Grammar,
        predefined: &IndexMap<String, ParserRef>,
    ) -> Result<Self, CompileError> {
        let mut rules = IndexMap::with_capacity(grammar.rules.len());
        for rule in grammar.rules() {
            let name = rule.name();
            if predefined.contains_key(name) {
                return Err(CompileError::DuplicateRule {
                    rule: rule.clone(),
                    message: format!("rule `{name}` is already predefined"),
                });
            }
            if rules.insert(name, rule).is_some() {
                return Err(CompileError::DuplicateRule {
                    rule: rule.clone(),
                    message: format!("duplicate rule `{name}`"),
                });
            }
        }
        Ok(Self { rules })
    }

    pub(crate) fn get(&self, name: &str) -> Option<&'g Rule> {
        self.rules.get(name).copied()
    }

    pub(crate) fn rules(&self) -> impl Iterator<Item = &'g Rule> + '_ {
        self.rules.values().copied()
    }
}
