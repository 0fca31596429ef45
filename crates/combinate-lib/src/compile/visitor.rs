//! Depth-first walk turning rule bodies into parsers.
//!
//! Each node is visited once: its children are compiled first, the default
//! parser for the node kind is built from theirs, and the transformer gets
//! the last word on what gets installed. Identifiers become deferred
//! references, so no rule's parser needs to exist before another's.

use combinate_core::{
    Alternative, Concatenation, Exception, GrammarNode, Group, Identifier, Optional, Range,
    Repeated, Rule, Terminal,
};
use indexmap::IndexMap;

use super::error::CompileError;
use super::range::RangeBounds;
use super::rule_table::RuleTable;
use crate::combinators::{self, CaseSensitivity, ParserRef};
use crate::transform::Transformer;

pub(crate) struct CompilingVisitor<'a, 'g> {
    pub(crate) rules: &'a RuleTable<'g>,
    pub(crate) predefined: &'a IndexMap<String, ParserRef>,
    pub(crate) transformer: &'a dyn Transformer,
    pub(crate) case_sensitivity: CaseSensitivity,
}

impl CompilingVisitor<'_, '_> {
    pub(crate) fn visit_rule(&self, rule: &Rule) -> Result<ParserRef, CompileError> {
        let body = self.visit_node(&rule.body)?;
        Ok(self.transformer.rule(rule, body))
    }

    fn visit_node(&self, node: &GrammarNode) -> Result<ParserRef, CompileError> {
        match node {
            GrammarNode::Identifier(n) => self.visit_identifier(n),
            GrammarNode::Terminal(n) => Ok(self.visit_terminal(n)),
            GrammarNode::Range(n) => self.visit_range(n),
            GrammarNode::Alternative(n) => self.visit_alternative(n),
            GrammarNode::Concatenation(n) => self.visit_concatenation(n),
            GrammarNode::Optional(n) => self.visit_optional(n),
            GrammarNode::Repeated(n) => self.visit_repeated(n),
            GrammarNode::Exception(n) => self.visit_exception(n),
            GrammarNode::Group(n) => self.visit_group(n),
        }
    }

    fn visit_identifier(&self, node: &Identifier) -> Result<ParserRef, CompileError> {
        let name = node.name.as_str();
        if self.rules.get(name).is_none() && !self.predefined.contains_key(name) {
            return Err(CompileError::UnresolvedIdentifier {
                identifier: node.clone(),
            });
        }
        Ok(self
            .transformer
            .identifier(node, combinators::rule_ref(name)))
    }

    fn visit_terminal(&self, node: &Terminal) -> ParserRef {
        let parser = combinators::string(node.value.as_str(), self.case_sensitivity);
        self.transformer.terminal(node, parser)
    }

    // Bounds are data, not sub-parsers: they are resolved here and never
    // visited on their own.
    fn visit_range(&self, node: &Range) -> Result<ParserRef, CompileError> {
        let bounds = RangeBounds {
            rules: self.rules,
            predefined: self.predefined,
        };
        let (from, to) = bounds.resolve(node)?;
        let parser = combinators::char_range(from, to, self.case_sensitivity);
        Ok(self.transformer.range(node, parser))
    }

    fn visit_alternative(&self, node: &Alternative) -> Result<ParserRef, CompileError> {
        let choices = self.visit_all(&node.choices)?;
        Ok(self
            .transformer
            .alternative(node, combinators::alternatives(choices)))
    }

    fn visit_concatenation(&self, node: &Concatenation) -> Result<ParserRef, CompileError> {
        let items = self.visit_all(&node.items)?;
        Ok(self
            .transformer
            .concatenation(node, combinators::sequence(items)))
    }

    fn visit_optional(&self, node: &Optional) -> Result<ParserRef, CompileError> {
        let inner = self.visit_node(&node.inner)?;
        Ok(self
            .transformer
            .optional(node, combinators::optional(inner)))
    }

    fn visit_repeated(&self, node: &Repeated) -> Result<ParserRef, CompileError> {
        let inner = self.visit_node(&node.inner)?;
        Ok(self
            .transformer
            .repeated(node, combinators::repeated(inner)))
    }

    fn visit_exception(&self, node: &Exception) -> Result<ParserRef, CompileError> {
        let base = self.visit_node(&node.base)?;
        let excluded = self.visit_node(&node.excluded)?;
        Ok(self
            .transformer
            .exception(node, combinators::exception(base, excluded)))
    }

    fn visit_group(&self, node: &Group) -> Result<ParserRef, CompileError> {
        let inner = self.visit_node(&node.inner)?;
        Ok(self.transformer.group(node, inner))
    }

    fn visit_all(&self, nodes: &[GrammarNode]) -> Result<Vec<ParserRef>, CompileError> {
        nodes.iter().map(|n| self.visit_node(n)).collect()
    }
}
