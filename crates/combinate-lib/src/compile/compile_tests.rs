use std::cell::Cell;
use std::sync::Arc;

use combinate_core::grammar::build::{
    alt, concat, group, ident, optional, range, repeated, rule, terminal,
};
use combinate_core::{Grammar, Rule, Terminal};
use indexmap::IndexMap;

use crate::combinators::{self, CaseSensitivity, ParserRef};
use crate::engine::RuntimeError;
use crate::{CompileError, CompileOptions, Compiler, IdentityTransformer, Registry, Transformer};

fn compile(rules: impl IntoIterator<Item = Rule>) -> Result<Registry, CompileError> {
    let grammar = Grammar::new("test", rules);
    Compiler::new(&grammar).compile(&IdentityTransformer)
}

#[track_caller]
fn expect_compiled(rules: impl IntoIterator<Item = Rule>) -> Registry {
    match compile(rules) {
        Ok(registry) => registry,
        Err(e) => panic!("Expected grammar to compile, got error: {e}"),
    }
}

fn letters() -> IndexMap<String, ParserRef> {
    IndexMap::from([(
        "LETTERS".to_owned(),
        combinators::chars_matching("LETTERS", char::is_alphabetic),
    )])
}

/// Counts callbacks of any kind.
#[derive(Default)]
struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    fn bump(&self, parser: ParserRef) -> ParserRef {
        self.calls.set(self.calls.get() + 1);
        parser
    }
}

impl Transformer for CallCounter {
    fn terminal(&self, _node: &Terminal, parser: ParserRef) -> ParserRef {
        self.bump(parser)
    }

    fn rule(&self, _node: &Rule, parser: ParserRef) -> ParserRef {
        self.bump(parser)
    }
}

#[test]
fn alternative_of_terminals() {
    // TEST = "abc" | "xyz";
    let registry = expect_compiled([rule("TEST", alt([terminal("abc"), terminal("xyz")]))]);

    insta::assert_snapshot!(registry.expect_match("TEST", "abc"), @r#"Text "abc" 0..3"#);
    insta::assert_snapshot!(registry.expect_match("TEST", "xyz"), @r#"Text "xyz" 0..3"#);
    registry.expect_no_match("TEST", "other");
}

#[test]
fn concatenation_needs_every_item() {
    // TEST = "abc", "xyz";
    let registry = expect_compiled([rule("TEST", concat([terminal("abc"), terminal("xyz")]))]);

    insta::assert_snapshot!(registry.expect_match("TEST", "abcxyz"), @r#"
    Sequence 0..6
      Text "abc" 0..3
      Text "xyz" 3..6
    "#);
    registry.expect_no_match("TEST", "abc");
}

#[test]
fn repetition_is_greedy_and_leaves_the_rest() {
    // TEST = { "abc" };
    let registry = expect_compiled([rule("TEST", repeated(terminal("abc")))]);

    let token = registry.parse("TEST", "abcabc123").unwrap().unwrap();

    assert_eq!(token.text("abcabc123"), "abcabc");
    insta::assert_snapshot!(token, @r#"
    Repeated 0..6
      Text "abc" 0..3
      Text "abc" 3..6
    "#);
}

#[test]
fn optional_tail_of_concatenation() {
    // TEST = "abc", ["xyz"];
    let registry = expect_compiled([rule(
        "TEST",
        concat([terminal("abc"), optional(terminal("xyz"))]),
    )]);

    insta::assert_snapshot!(registry.expect_match("TEST", "abc"), @r#"
    Sequence 0..3
      Text "abc" 0..3
    "#);
    insta::assert_snapshot!(registry.expect_match("TEST", "abcxyz"), @r#"
    Sequence 0..6
      Text "abc" 0..3
      Text "xyz" 3..6
    "#);
}

#[test]
fn duplicate_rule() {
    let err = compile([rule("DUP", terminal("a")), rule("DUP", terminal("b"))]).unwrap_err();

    let CompileError::DuplicateRule { rule, .. } = &err else {
        panic!("expected duplicate rule, got {err:?}");
    };
    assert_eq!(rule.to_string(), r#"DUP = "b";"#);
    insta::assert_snapshot!(err, @"duplicate rule `DUP`");
}

#[test]
fn duplicate_of_predefined() {
    let grammar = Grammar::new("test", [rule("LETTERS", terminal("abc"))]);

    let err = Compiler::new(&grammar)
        .with_predefined(letters())
        .compile(&IdentityTransformer)
        .unwrap_err();

    assert!(matches!(&err, CompileError::DuplicateRule { rule, .. } if rule.name() == "LETTERS"));
    insta::assert_snapshot!(err, @"rule `LETTERS` is already predefined");
}

#[test]
fn duplicate_found_before_any_parser_is_built() {
    let grammar = Grammar::new(
        "test",
        [
            rule("A", terminal("a")),
            rule("B", terminal("b")),
            rule("A", terminal("c")),
        ],
    );
    let counter = CallCounter::default();

    let res = Compiler::new(&grammar).compile(&counter);

    assert!(matches!(res, Err(CompileError::DuplicateRule { .. })));
    assert_eq!(counter.calls.get(), 0);
}

#[test]
fn unresolved_identifier() {
    let err = compile([
        rule("A", terminal("a")),
        rule("B", concat([ident("A"), optional(group(ident("NOPE")))])),
    ])
    .unwrap_err();

    assert!(matches!(
        &err,
        CompileError::UnresolvedIdentifier { identifier } if identifier.name == "NOPE"
    ));
    insta::assert_snapshot!(err, @"unresolved identifier `NOPE`");
}

#[test]
fn one_entry_per_rule_plus_predefined() {
    let grammar = Grammar::new(
        "test",
        [
            rule("WORD", ident("LETTERS")),
            rule(
                "WORDS",
                concat([ident("WORD"), repeated(concat([terminal(" "), ident("WORD")]))]),
            ),
        ],
    );
    let predefined = letters();
    let letters_parser = Arc::clone(&predefined["LETTERS"]);

    let registry = crate::transform(&grammar, predefined, &IdentityTransformer).unwrap();

    assert_eq!(registry.names().collect::<Vec<_>>(), ["LETTERS", "WORD", "WORDS"]);
    assert!(Arc::ptr_eq(registry.get("LETTERS").unwrap(), &letters_parser));
    insta::assert_snapshot!(registry.expect_match("WORDS", "hello big world."), @r#"
    Sequence 0..15
      Text "hello" 0..5
      Repeated 5..15
        Sequence 5..9
          Text " " 5..6
          Text "big" 6..9
        Sequence 9..15
          Text " " 9..10
          Text "world" 10..15
    "#);
}

#[test]
fn forward_reference() {
    let registry = expect_compiled([
        rule("START", concat([ident("LATER"), ident("LATER")])),
        rule("LATER", terminal("x")),
    ]);

    insta::assert_snapshot!(registry.expect_match("START", "xx"), @r#"
    Sequence 0..2
      Text "x" 0..1
      Text "x" 1..2
    "#);
}

#[test]
fn self_recursive_rule() {
    // P = "(", [P], ")";
    let registry = expect_compiled([rule(
        "P",
        concat([terminal("("), optional(ident("P")), terminal(")")]),
    )]);

    insta::assert_snapshot!(registry.expect_match("P", "(())"), @r#"
    Sequence 0..4
      Text "(" 0..1
      Sequence 1..3
        Text "(" 1..2
        Text ")" 2..3
      Text ")" 3..4
    "#);
    registry.expect_no_match("P", "(()");
}

#[test]
fn mutually_recursive_rules() {
    // A = "a", [B]; B = "b", [A];
    let registry = expect_compiled([
        rule("A", concat([terminal("a"), optional(ident("B"))])),
        rule("B", concat([terminal("b"), optional(ident("A"))])),
    ]);

    let token = registry.parse("A", "ababx").unwrap().unwrap();

    assert_eq!(token.span().to_string(), "0..4");
    registry.expect_no_match("B", "ab");
}

#[test]
fn nesting_deeper_than_recursion_fuel() {
    let grammar = Grammar::new(
        "test",
        [rule("P", concat([terminal("("), optional(ident("P")), terminal(")")]))],
    );
    let registry = Compiler::new(&grammar)
        .with_recursion_fuel(Some(3))
        .compile(&IdentityTransformer)
        .unwrap();

    // The innermost optional still enters `P` once before failing.
    assert!(registry.parse("P", "(())").unwrap().is_some());
    let err = registry.expect_runtime_error("P", "((()))");
    assert_eq!(err, RuntimeError::RecursionLimitExceeded);
}

#[test]
fn left_recursion_hits_recursion_limit() {
    // E = E, "+", "1" | "1";
    let grammar = Grammar::new(
        "test",
        [rule(
            "E",
            alt([concat([ident("E"), terminal("+"), terminal("1")]), terminal("1")]),
        )],
    );
    let registry = Compiler::new(&grammar)
        .with_recursion_fuel(Some(64))
        .compile(&IdentityTransformer)
        .unwrap();

    let err = registry.expect_runtime_error("E", "1+1");

    assert_eq!(err, RuntimeError::RecursionLimitExceeded);
    insta::assert_snapshot!(err, @"runtime recursion limit exceeded");
}

#[test]
fn exec_fuel_from_compiler() {
    let grammar = Grammar::new("test", [rule("TEST", repeated(terminal("a")))]);
    let registry = Compiler::new(&grammar)
        .with_exec_fuel(Some(5))
        .compile(&IdentityTransformer)
        .unwrap();

    let err = registry.expect_runtime_error("TEST", "aaaaaaaa");

    assert_eq!(err, RuntimeError::ExecFuelExhausted);
    assert!(registry.parse("TEST", "a").unwrap().is_some());
}

#[test]
fn long_input_with_default_options() {
    // TEST = {LETTER}; LETTER = "a";
    let grammar = Grammar::new(
        "test",
        [
            rule("TEST", repeated(ident("LETTER"))),
            rule("LETTER", terminal("a")),
        ],
    );
    let registry =
        crate::transform(&grammar, IndexMap::new(), &IdentityTransformer).unwrap();
    let text = "a".repeat(600_000);

    let token = registry.parse("TEST", &text).unwrap().unwrap();

    assert_eq!(token.span().end, 600_000);
    assert_eq!(token.children().len(), 600_000);
}

#[test]
fn nesting_depth_needs_recursion_fuel_above_it() {
    // P = "(", [P], ")";
    let grammar = Grammar::new(
        "test",
        [rule(
            "P",
            concat([terminal("("), optional(ident("P")), terminal(")")]),
        )],
    );
    let text = format!("{}{}", "(".repeat(300), ")".repeat(300));
    let compile = |limit| {
        Compiler::new(&grammar)
            .with_recursion_fuel(Some(limit))
            .compile(&IdentityTransformer)
            .unwrap()
    };

    let err = compile(300).expect_runtime_error("P", &text);
    assert_eq!(err, RuntimeError::RecursionLimitExceeded);

    let token = compile(301).parse("P", &text).unwrap().unwrap();
    assert_eq!(token.span().end, 600);
}

#[test]
fn case_insensitive_terminals() {
    let grammar = Grammar::new(
        "test",
        [rule("KEYWORD", alt([terminal("select"), terminal("from")]))],
    );
    let registry = Compiler::new(&grammar)
        .with_case_sensitivity(CaseSensitivity::Insensitive)
        .compile(&IdentityTransformer)
        .unwrap();

    insta::assert_snapshot!(registry.expect_match("KEYWORD", "FROM t"), @r#"Text "FROM" 0..4"#);
}

#[test]
fn case_insensitive_ranges() {
    let grammar = Grammar::new("test", [rule("HEX", range(terminal("a"), terminal("f")))]);
    let registry = Compiler::new(&grammar)
        .with_case_sensitivity(CaseSensitivity::Insensitive)
        .compile(&IdentityTransformer)
        .unwrap();

    insta::assert_snapshot!(registry.expect_match("HEX", "B"), @"Char 'B' 0..1");
    registry.expect_no_match("HEX", "X");
}

#[test]
fn options_builder() {
    let grammar = Grammar::default();
    let options = CompileOptions {
        case_sensitivity: CaseSensitivity::Insensitive,
        ..CompileOptions::default()
    };

    let compiler = Compiler::new(&grammar)
        .with_options(options)
        .with_exec_fuel(Some(10));

    assert_eq!(compiler.options().case_sensitivity, CaseSensitivity::Insensitive);
    assert_eq!(compiler.options().limits.exec_fuel, Some(10));
    assert!(compiler.compile(&IdentityTransformer).unwrap().is_empty());
}

#[test]
fn compiling_twice_gives_independent_registries() {
    let grammar = Grammar::new(
        "test",
        [
            rule("DIGIT", range(terminal("0"), terminal("9"))),
            rule("NUMBER", concat([ident("DIGIT"), repeated(ident("DIGIT"))])),
        ],
    );
    let compiler = Compiler::new(&grammar);

    let first = compiler.compile(&IdentityTransformer).unwrap();
    let second = compiler.compile(&IdentityTransformer).unwrap();

    for input in ["0", "42", "1234x", "x"] {
        assert_eq!(
            first.parse("NUMBER", input).unwrap(),
            second.parse("NUMBER", input).unwrap()
        );
    }
    assert!(!Arc::ptr_eq(
        first.get("NUMBER").unwrap(),
        second.get("NUMBER").unwrap()
    ));
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn transformer_sees_each_node_once() {
    let grammar = Grammar::new(
        "test",
        [
            rule("A", alt([terminal("a"), terminal("b")])),
            rule("B", concat([ident("A"), ident("A"), terminal("c")])),
        ],
    );
    let counter = CallCounter::default();

    Compiler::new(&grammar).compile(&counter).unwrap();

    // Three terminals and two rules; identifiers are not expanded.
    assert_eq!(counter.calls.get(), 5);
}
