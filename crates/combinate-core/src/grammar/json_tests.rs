use super::build::*;
use super::*;

#[test]
fn parse_minimal_grammar() {
    let json = r#"{
        "name": "test",
        "rules": [
            { "name": "TEST", "body": { "type": "IDENTIFIER", "name": "WORD" } },
            { "name": "WORD", "body": { "type": "TERMINAL", "value": "x" } }
        ]
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.name, "test");
    assert_eq!(grammar.rules.len(), 2);
    assert_eq!(grammar.rules[0].body, ident("WORD"));
}

#[test]
fn parse_every_node_kind() {
    let json = r#"{
        "rules": [
            { "name": "TEST", "body": {
                "type": "CONCATENATION",
                "items": [
                    { "type": "RANGE",
                      "from": { "type": "TERMINAL", "value": "a" },
                      "to": { "type": "TERMINAL", "value": "z" } },
                    { "type": "OPTIONAL", "content": { "type": "TERMINAL", "value": "?" } },
                    { "type": "REPEATED", "content": { "type": "IDENTIFIER", "name": "X" } },
                    { "type": "EXCEPTION",
                      "base": { "type": "IDENTIFIER", "name": "X" },
                      "excluded": { "type": "TERMINAL", "value": "q" } },
                    { "type": "GROUP", "content": {
                        "type": "ALTERNATIVE",
                        "choices": [
                            { "type": "TERMINAL", "value": "1" },
                            { "type": "TERMINAL", "value": "2" }
                        ]
                    } }
                ]
            } }
        ]
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.name, "");
    insta::assert_snapshot!(grammar, @r#"TEST = "a".."z", ["?"], {X}, X - "q", ("1" | "2");"#);
}

#[test]
fn duplicate_rule_names_survive() {
    let json = r#"{
        "rules": [
            { "name": "DUP", "body": { "type": "TERMINAL", "value": "a" } },
            { "name": "DUP", "body": { "type": "TERMINAL", "value": "b" } }
        ]
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.rules.len(), 2);
}

#[test]
fn unknown_node_type_is_an_error() {
    let json = r#"{ "rules": [ { "name": "A", "body": { "type": "LOOKAHEAD" } } ] }"#;

    let err = Grammar::from_json(json).unwrap_err();
    assert!(err.to_string().starts_with("JSON grammar error:"));
}

#[test]
fn written_json_reads_back() {
    let grammar = Grammar::new(
        "calc",
        [
            rule("NUMBER", repeated(range(terminal("0"), terminal("9")))),
            rule(
                "SUM",
                concat([ident("NUMBER"), optional(concat([terminal("+"), ident("SUM")]))]),
            ),
        ],
    );

    let json = grammar.to_json().unwrap();
    assert_eq!(Grammar::from_json(&json).unwrap(), grammar);
}
