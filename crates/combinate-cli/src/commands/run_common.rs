//! Shared logic for the commands: load, compile, pick a rule.

use std::path::PathBuf;

use combinate_core::Grammar;
use combinate_lib::{CaseSensitivity, Compiler, Registry, Transformer};

use super::grammar_loader::{load_grammar, load_source};

pub struct GrammarInput {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub case_sensitivity: CaseSensitivity,
}

pub struct RunInput {
    pub grammar: GrammarInput,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub rule: Option<String>,
    pub fuel: u32,
    pub recursion_limit: u32,
}

pub struct Prepared {
    pub grammar: Grammar,
    pub registry: Registry,
}

pub struct PreparedRun {
    pub registry: Registry,
    pub rule: String,
    pub source: String,
}

/// Load and compile a grammar, exiting with status 1 on failure.
pub fn prepare_grammar(input: &GrammarInput, transformer: &dyn Transformer) -> Prepared {
    prepare(input, transformer, |compiler| compiler)
}

/// Load and compile a grammar, then load the text and pick the rule to run.
pub fn prepare_run(input: &RunInput, transformer: &dyn Transformer) -> PreparedRun {
    let Prepared { grammar, registry } = prepare(&input.grammar, transformer, |compiler| {
        compiler
            .with_exec_fuel(Some(input.fuel))
            .with_recursion_fuel(Some(input.recursion_limit))
    });

    let rule = resolve_rule(&grammar, &registry, input.rule.as_deref());

    let source = load_source(
        input.source_path.as_deref(),
        input.source_text.as_deref(),
        input.grammar.grammar_path.as_deref(),
    )
    .unwrap_or_else(|e| fail(e));

    PreparedRun {
        registry,
        rule,
        source,
    }
}

fn prepare(
    input: &GrammarInput,
    transformer: &dyn Transformer,
    configure: impl FnOnce(Compiler<'_>) -> Compiler<'_>,
) -> Prepared {
    let grammar = load_grammar(input.grammar_path.as_deref(), input.grammar_text.as_deref())
        .unwrap_or_else(|e| fail(e));

    let compiler = Compiler::new(&grammar).with_case_sensitivity(input.case_sensitivity);
    let registry = configure(compiler)
        .compile(transformer)
        .unwrap_or_else(|e| fail(e));

    Prepared { grammar, registry }
}

/// Explicit rule name, or the first rule of the grammar.
pub fn resolve_rule(grammar: &Grammar, registry: &Registry, name: Option<&str>) -> String {
    match name {
        Some(name) if registry.contains(name) => name.to_owned(),
        Some(name) => fail(format!("unknown rule: {name}")),
        None => match grammar.rules().next() {
            Some(rule) => rule.name().to_owned(),
            None => fail("grammar has no rules"),
        },
    }
}

/// Reported by exec and trace when the rule does not match.
pub fn no_match_message(rule: &str) -> String {
    format!("error: `{rule}` does not match the input")
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1)
}
