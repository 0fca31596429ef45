//! Grammar node definitions.

/// Complete EBNF grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    /// Grammar name, informational only.
    pub name: String,
    /// Rules in declaration order. Duplicates are representable;
    /// rejecting them is the compiler's job.
    pub rules: Vec<Rule>,
}

/// A named production: `identifier = body;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub identifier: Identifier,
    pub body: GrammarNode,
}

/// Rule name, or a reference to a rule inside another rule's body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

/// Literal text matched as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    pub value: String,
}

/// Single character between two bounds, inclusive.
///
/// Bounds are arbitrary nodes here; only single-character terminals
/// (directly or through one identifier) survive compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub from: Box<GrammarNode>,
    pub to: Box<GrammarNode>,
}

/// `a | b | c`, tried in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    pub choices: Vec<GrammarNode>,
}

/// `a, b, c`, all required in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concatenation {
    pub items: Vec<GrammarNode>,
}

/// `[a]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optional {
    pub inner: Box<GrammarNode>,
}

/// `{a}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeated {
    pub inner: Box<GrammarNode>,
}

/// `base - excluded`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    pub base: Box<GrammarNode>,
    pub excluded: Box<GrammarNode>,
}

/// `(a)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub inner: Box<GrammarNode>,
}

/// Expression node of a rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarNode {
    Identifier(Identifier),
    Terminal(Terminal),
    Range(Range),
    Alternative(Alternative),
    Concatenation(Concatenation),
    Optional(Optional),
    Repeated(Repeated),
    Exception(Exception),
    Group(Group),
}

impl Grammar {
    pub fn new(name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            name: name.into(),
            rules: rules.into_iter().collect(),
        }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// First rule declared under `name`.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.identifier.name == name)
    }
}

impl Rule {
    pub fn name(&self) -> &str {
        &self.identifier.name
    }
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GrammarNode {
    /// Lowercase node kind, as used in messages and JSON tags.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GrammarNode::Identifier(_) => "identifier",
            GrammarNode::Terminal(_) => "terminal",
            GrammarNode::Range(_) => "range",
            GrammarNode::Alternative(_) => "alternative",
            GrammarNode::Concatenation(_) => "concatenation",
            GrammarNode::Optional(_) => "optional",
            GrammarNode::Repeated(_) => "repeated",
            GrammarNode::Exception(_) => "exception",
            GrammarNode::Group(_) => "group",
        }
    }

    /// Direct children, in source order.
    pub fn children(&self) -> Vec<&GrammarNode> {
        match self {
            GrammarNode::Identifier(_) | GrammarNode::Terminal(_) => Vec::new(),
            GrammarNode::Range(r) => vec![&*r.from, &*r.to],
            GrammarNode::Alternative(a) => a.choices.iter().collect(),
            GrammarNode::Concatenation(c) => c.items.iter().collect(),
            GrammarNode::Optional(o) => vec![&*o.inner],
            GrammarNode::Repeated(r) => vec![&*r.inner],
            GrammarNode::Exception(e) => vec![&*e.base, &*e.excluded],
            GrammarNode::Group(g) => vec![&*g.inner],
        }
    }

    /// Strips any number of enclosing groups.
    pub fn ungrouped(&self) -> &GrammarNode {
        let mut node = self;
        while let GrammarNode::Group(g) = node {
            node = &g.inner;
        }
        node
    }

    /// The character of a terminal holding exactly one character.
    pub fn as_single_char(&self) -> Option<char> {
        let GrammarNode::Terminal(t) = self.ungrouped() else {
            return None;
        };
        let mut chars = t.value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// Every identifier referenced in this subtree, depth-first.
    pub fn identifiers(&self) -> Vec<&Identifier> {
        fn collect<'a>(node: &'a GrammarNode, out: &mut Vec<&'a Identifier>) {
            if let GrammarNode::Identifier(ident) = node {
                out.push(ident);
            }
            for child in node.children() {
                collect(child, out);
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}

impl From<Identifier> for GrammarNode {
    fn from(value: Identifier) -> Self {
        GrammarNode::Identifier(value)
    }
}

impl From<Terminal> for GrammarNode {
    fn from(value: Terminal) -> Self {
        GrammarNode::Terminal(value)
    }
}
