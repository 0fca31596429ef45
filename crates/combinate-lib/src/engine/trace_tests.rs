use combinate_core::grammar::build::{alt, concat, ident, rule, terminal};
use combinate_core::{Colors, Grammar};

use crate::engine::{PrintTracer, Verbosity};
use crate::{Compiler, IdentityTransformer, Registry};

fn registry() -> Registry {
    let grammar = Grammar::new(
        "trace",
        [
            rule("TEST", concat([ident("A"), ident("B")])),
            rule("A", terminal("a")),
            rule("B", alt([terminal("x"), terminal("b")])),
        ],
    );
    Compiler::new(&grammar).compile(&IdentityTransformer).unwrap()
}

fn trace(text: &str, verbosity: Verbosity, colors: Colors) -> String {
    let mut tracer = PrintTracer::new(verbosity, colors);
    registry().parse_with("TEST", text, &mut tracer).unwrap();
    tracer.lines().join("\n")
}

#[test]
fn rules_only_by_default() {
    let res = trace("ab", Verbosity::Default, Colors::OFF);

    insta::assert_snapshot!(res, @r"
    TEST @0
      A @0
      A matched 0..1
      B @1
      B matched 1..2
    TEST matched 0..2
    ");
}

#[test]
fn verbose_shows_terminals_and_backtracking() {
    let res = trace("ab", Verbosity::Verbose, Colors::OFF);

    insta::assert_snapshot!(res, @r#"
    TEST @0
      A @0
        "a" "a" 0..1
      A matched 0..1
      B @1
        "x" no match @1
        backtrack @1
        "b" "b" 1..2
      B matched 1..2
    TEST matched 0..2
    "#);
}

#[test]
fn failure_unwinds() {
    let res = trace("ac", Verbosity::Default, Colors::OFF);

    insta::assert_snapshot!(res, @r"
    TEST @0
      A @0
      A matched 0..1
      B @1
      B failed @1
    TEST failed @0
    ");
}

#[test]
fn very_verbose_shows_upcoming_input() {
    let res = trace("abcdefghijklmnopqrstuvwxyz", Verbosity::VeryVerbose, Colors::OFF);
    let first = res.lines().next().unwrap();

    assert_eq!(first, r#"TEST @0 "abcdefghijklmnop…""#);
}

#[test]
fn colored_output() {
    let res = trace("ab", Verbosity::Default, Colors::ON);
    let first = res.lines().next().unwrap();

    assert_eq!(first, "\x1b[34mTEST\x1b[0m \x1b[2m@0\x1b[0m");
}
