//! JSON form of grammars.
//!
//! Nodes are internally tagged with an upper-case `type` field:
//!
//! ```json
//! {
//!   "name": "greeting",
//!   "rules": [
//!     { "name": "TEST", "body": { "type": "TERMINAL", "value": "hello" } }
//!   ]
//! }
//! ```
//!
//! Rules are a list rather than an object so that duplicate names reach the
//! compiler instead of being collapsed by the JSON reader.

use serde::{Deserialize, Serialize};

use super::types::{
    Alternative, Concatenation, Exception, Grammar, GrammarNode, Group, Identifier, Optional,
    Range, Repeated, Rule, Terminal,
};

/// Error while reading or writing a grammar.
#[derive(Debug)]
pub enum GrammarError {
    Json(serde_json::Error),
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON grammar error: {e}"),
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
        }
    }
}

impl Grammar {
    /// Parse grammar from JSON string.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json).map_err(GrammarError::Json)?;
        Ok(raw.into())
    }

    /// Pretty-printed JSON, readable back with [`Grammar::from_json`].
    pub fn to_json(&self) -> Result<String, GrammarError> {
        serde_json::to_string_pretty(&RawGrammar::from(self)).map_err(GrammarError::Json)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RawGrammar {
    #[serde(default)]
    name: String,
    rules: Vec<RawRule>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawRule {
    name: String,
    body: RawNode,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
#[allow(clippy::upper_case_acronyms)]
enum RawNode {
    IDENTIFIER { name: String },
    TERMINAL { value: String },
    RANGE { from: Box<RawNode>, to: Box<RawNode> },
    ALTERNATIVE { choices: Vec<RawNode> },
    CONCATENATION { items: Vec<RawNode> },
    OPTIONAL { content: Box<RawNode> },
    REPEATED { content: Box<RawNode> },
    EXCEPTION { base: Box<RawNode>, excluded: Box<RawNode> },
    GROUP { content: Box<RawNode> },
}

impl From<RawGrammar> for Grammar {
    fn from(raw: RawGrammar) -> Self {
        Self {
            name: raw.name,
            rules: raw
                .rules
                .into_iter()
                .map(|r| Rule {
                    identifier: Identifier::new(r.name),
                    body: r.body.into(),
                })
                .collect(),
        }
    }
}

impl From<RawNode> for GrammarNode {
    fn from(raw: RawNode) -> Self {
        #[allow(clippy::boxed_local)] // Fields are Box<RawNode>, output needs Box<GrammarNode>
        fn conv(content: Box<RawNode>) -> Box<GrammarNode> {
            Box::new(GrammarNode::from(*content))
        }

        match raw {
            RawNode::IDENTIFIER { name } => GrammarNode::Identifier(Identifier { name }),
            RawNode::TERMINAL { value } => GrammarNode::Terminal(Terminal { value }),
            RawNode::RANGE { from, to } => GrammarNode::Range(Range {
                from: conv(from),
                to: conv(to),
            }),
            RawNode::ALTERNATIVE { choices } => GrammarNode::Alternative(Alternative {
                choices: choices.into_iter().map(Into::into).collect(),
            }),
            RawNode::CONCATENATION { items } => GrammarNode::Concatenation(Concatenation {
                items: items.into_iter().map(Into::into).collect(),
            }),
            RawNode::OPTIONAL { content } => GrammarNode::Optional(Optional {
                inner: conv(content),
            }),
            RawNode::REPEATED { content } => GrammarNode::Repeated(Repeated {
                inner: conv(content),
            }),
            RawNode::EXCEPTION { base, excluded } => GrammarNode::Exception(Exception {
                base: conv(base),
                excluded: conv(excluded),
            }),
            RawNode::GROUP { content } => GrammarNode::Group(Group {
                inner: conv(content),
            }),
        }
    }
}

impl From<&Grammar> for RawGrammar {
    fn from(grammar: &Grammar) -> Self {
        Self {
            name: grammar.name.clone(),
            rules: grammar
                .rules
                .iter()
                .map(|r| RawRule {
                    name: r.identifier.name.clone(),
                    body: (&r.body).into(),
                })
                .collect(),
        }
    }
}

impl From<&GrammarNode> for RawNode {
    fn from(node: &GrammarNode) -> Self {
        fn conv(node: &GrammarNode) -> Box<RawNode> {
            Box::new(RawNode::from(node))
        }

        match node {
            GrammarNode::Identifier(i) => RawNode::IDENTIFIER {
                name: i.name.clone(),
            },
            GrammarNode::Terminal(t) => RawNode::TERMINAL {
                value: t.value.clone(),
            },
            GrammarNode::Range(r) => RawNode::RANGE {
                from: conv(&r.from),
                to: conv(&r.to),
            },
            GrammarNode::Alternative(a) => RawNode::ALTERNATIVE {
                choices: a.choices.iter().map(Into::into).collect(),
            },
            GrammarNode::Concatenation(c) => RawNode::CONCATENATION {
                items: c.items.iter().map(Into::into).collect(),
            },
            GrammarNode::Optional(o) => RawNode::OPTIONAL {
                content: conv(&o.inner),
            },
            GrammarNode::Repeated(r) => RawNode::REPEATED {
                content: conv(&r.inner),
            },
            GrammarNode::Exception(e) => RawNode::EXCEPTION {
                base: conv(&e.base),
                excluded: conv(&e.excluded),
            },
            GrammarNode::Group(g) => RawNode::GROUP {
                content: conv(&g.inner),
            },
        }
    }
}
