//! Shorthand constructors for grammar trees.
//!
//! ```
//! use combinate_core::grammar::build::*;
//!
//! // DIGITS = {"0".."9"};
//! let digits = rule("DIGITS", repeated(range(terminal("0"), terminal("9"))));
//! assert_eq!(digits.to_string(), r#"DIGITS = {"0".."9"};"#);
//! ```

use super::types::{
    Alternative, Concatenation, Exception, GrammarNode, Group, Identifier, Optional, Range,
    Repeated, Rule, Terminal,
};

pub fn ident(name: impl Into<String>) -> GrammarNode {
    GrammarNode::Identifier(Identifier::new(name))
}

pub fn terminal(value: impl Into<String>) -> GrammarNode {
    GrammarNode::Terminal(Terminal {
        value: value.into(),
    })
}

pub fn range(from: GrammarNode, to: GrammarNode) -> GrammarNode {
    GrammarNode::Range(Range {
        from: Box::new(from),
        to: Box::new(to),
    })
}

pub fn alt(choices: impl IntoIterator<Item = GrammarNode>) -> GrammarNode {
    GrammarNode::Alternative(Alternative {
        choices: choices.into_iter().collect(),
    })
}

pub fn concat(items: impl IntoIterator<Item = GrammarNode>) -> GrammarNode {
    GrammarNode::Concatenation(Concatenation {
        items: items.into_iter().collect(),
    })
}

pub fn optional(inner: GrammarNode) -> GrammarNode {
    GrammarNode::Optional(Optional {
        inner: Box::new(inner),
    })
}

pub fn repeated(inner: GrammarNode) -> GrammarNode {
    GrammarNode::Repeated(Repeated {
        inner: Box::new(inner),
    })
}

pub fn exception(base: GrammarNode, excluded: GrammarNode) -> GrammarNode {
    GrammarNode::Exception(Exception {
        base: Box::new(base),
        excluded: Box::new(excluded),
    })
}

pub fn group(inner: GrammarNode) -> GrammarNode {
    GrammarNode::Group(Group {
        inner: Box::new(inner),
    })
}

pub fn rule(name: impl Into<String>, body: GrammarNode) -> Rule {
    Rule {
        identifier: Identifier::new(name),
        body,
    }
}
