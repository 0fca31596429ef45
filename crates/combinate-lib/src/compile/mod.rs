//! Grammar compilation.
//!
//! Stages: rule table → visit every rule → registry.
//! The rule table rejects duplicate identifiers before any parser is built;
//! the visitor rejects unresolved identifiers and bad range bounds. The
//! first error aborts the whole compilation.

pub mod error;
mod range;
mod rule_table;
mod visitor;

#[cfg(test)]
mod compile_tests;

use combinate_core::Grammar;
use indexmap::IndexMap;

use crate::combinators::{CaseSensitivity, ParserRef};
use crate::engine::ParseLimits;
use crate::registry::Registry;
use crate::transform::Transformer;

pub use error::CompileError;
use rule_table::RuleTable;
use visitor::CompilingVisitor;

/// Settings shared by every parser of one compilation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// How terminals and character ranges compare against input.
    pub case_sensitivity: CaseSensitivity,
    /// Fuel limits the registry applies to each parse.
    pub limits: ParseLimits,
}

/// Compiles one grammar into a [`Registry`].
///
/// Create with [`new`](Self::new), optionally add predefined parsers and
/// adjust options, then call [`compile`](Self::compile). The compiler can
/// be reused: every call builds an independent registry.
pub struct Compiler<'g> {
    grammar: &'g Grammar,
    predefined: IndexMap<String, ParserRef>,
    options: CompileOptions,
}

impl<'g> Compiler<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            predefined: IndexMap::new(),
            options: CompileOptions::default(),
        }
    }

    /// Parsers installed as-is under their names.
    ///
    /// Grammar identifiers may refer to them, but no grammar rule may share
    /// a name with one.
    pub fn with_predefined(mut self, predefined: IndexMap<String, ParserRef>) -> Self {
        self.predefined = predefined;
        self
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// How terminals and character ranges compare against input.
    pub fn with_case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.options.case_sensitivity = case_sensitivity;
        self
    }

    /// Set execution fuel limit. None = infinite, the default.
    ///
    /// Execution fuel never replenishes. It bounds the work of a single
    /// parse; running out fails that parse with a runtime error.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.options.limits.exec_fuel = limit;
        self
    }

    /// Set recursion depth limit. None = infinite.
    ///
    /// Recursion fuel restores when a rule call returns. It bounds rule
    /// nesting, which also stops left-recursive rules before they overflow
    /// the stack. Valid input nesting rules `N` deep needs a limit above `N`;
    /// the default is [`DEFAULT_RECURSION_FUEL`](crate::engine::DEFAULT_RECURSION_FUEL).
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.options.limits.recursion_fuel = limit;
        self
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// Build one parser per rule, shaped by `transformer`.
    pub fn compile(&self, transformer: &dyn Transformer) -> Result<Registry, CompileError> {
        let rules = RuleTable::build(self.grammar, &self.predefined)?;
        let visitor = CompilingVisitor {
            rules: &rules,
            predefined: &self.predefined,
            transformer,
            case_sensitivity: self.options.case_sensitivity,
        };

        let mut parsers = self.predefined.clone();
        for rule in rules.rules() {
            let parser = visitor.visit_rule(rule)?;
            parsers.insert(rule.name().to_owned(), parser);
        }
        Ok(Registry::new(parsers, self.options.limits))
    }
}
