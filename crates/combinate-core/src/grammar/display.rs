//! EBNF rendering.
//!
//! Output is re-readable EBNF: parentheses are inserted wherever a child
//! binds looser than its parent, so nested alternatives and concatenations
//! keep their tree shape.

use std::fmt;

use super::types::{Grammar, GrammarNode, Identifier, Rule, Terminal};

/// Binding strength, loosest first.
fn precedence(node: &GrammarNode) -> u8 {
    match node {
        GrammarNode::Alternative(_) => 0,
        GrammarNode::Concatenation(_) => 1,
        GrammarNode::Exception(_) => 2,
        _ => 3,
    }
}

fn write_child(f: &mut fmt::Formatter<'_>, node: &GrammarNode, min: u8) -> fmt::Result {
    if precedence(node) < min {
        write!(f, "({node})")
    } else {
        write!(f, "{node}")
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    nodes: &[GrammarNode],
    separator: &str,
    min: u8,
) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write_child(f, node, min)?;
    }
    Ok(())
}

impl fmt::Display for GrammarNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarNode::Identifier(ident) => write!(f, "{ident}"),
            GrammarNode::Terminal(t) => write!(f, "{t}"),
            GrammarNode::Range(r) => {
                write_child(f, &r.from, 3)?;
                f.write_str("..")?;
                write_child(f, &r.to, 3)
            }
            GrammarNode::Alternative(a) => write_joined(f, &a.choices, " | ", 1),
            GrammarNode::Concatenation(c) => write_joined(f, &c.items, ", ", 2),
            GrammarNode::Optional(o) => write!(f, "[{}]", o.inner),
            GrammarNode::Repeated(r) => write!(f, "{{{}}}", r.inner),
            GrammarNode::Exception(e) => {
                write_child(f, &e.base, 3)?;
                f.write_str(" - ")?;
                write_child(f, &e.excluded, 3)
            }
            GrammarNode::Group(g) => write!(f, "({})", g.inner),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.value.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {};", self.identifier, self.body)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}
