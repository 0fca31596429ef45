//! Range bound resolution.
//!
//! A bound is a single-character terminal, written directly or reached
//! through exactly one identifier whose rule body is such a terminal.
//! Groups around either are transparent.

use combinate_core::{GrammarNode, Range};
use indexmap::IndexMap;

use super::error::CompileError;
use super::rule_table::RuleTable;
use crate::combinators::ParserRef;

pub(crate) struct RangeBounds<'a, 'g> {
    pub(crate) rules: &'a RuleTable<'g>,
    pub(crate) predefined: &'a IndexMap<String, ParserRef>,
}

impl RangeBounds<'_, '_> {
    /// Both bounds of `range`, checked to be in order.
    pub(crate) fn resolve(&self, range: &Range) -> Result<(char, char), CompileError> {
        let from = self.bound(&range.from)?;
        let to = self.bound(&range.to)?;
        if from > to {
            return Err(CompileError::invalid_range_bound(
                &GrammarNode::Range(range.clone()),
                format!("lower bound {from:?} is greater than upper bound {to:?}"),
            ));
        }
        Ok((from, to))
    }

    fn bound(&self, node: &GrammarNode) -> Result<char, CompileError> {
        match node.ungrouped() {
            GrammarNode::Terminal(t) => node.as_single_char().ok_or_else(|| {
                CompileError::invalid_range_bound(
                    node,
                    format!(
                        "expected a single character, found {} characters",
                        t.value.chars().count()
                    ),
                )
            }),
            GrammarNode::Identifier(ident) => {
                let name = ident.name.as_str();
                if self.predefined.contains_key(name) {
                    return Err(CompileError::invalid_range_bound(
                        node,
                        format!("`{name}` is predefined, its characters are unknown"),
                    ));
                }
                let Some(rule) = self.rules.get(name) else {
                    return Err(CompileError::unresolved(name));
                };
                rule.body.as_single_char().ok_or_else(|| {
                    CompileError::invalid_range_bound(
                        node,
                        format!("rule `{name}` is not a single-character terminal"),
                    )
                })
            }
            other => Err(CompileError::invalid_range_bound(
                node,
                format!("{} cannot bound a range", other.kind_name()),
            )),
        }
    }
}
