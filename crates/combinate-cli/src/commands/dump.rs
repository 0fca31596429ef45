//! Show a grammar as EBNF next to the parsers compiled from it.

use combinate_core::Colors;
use combinate_lib::IdentityTransformer;

use super::run_common::{self, GrammarInput, Prepared};

pub struct DumpArgs {
    pub grammar: GrammarInput,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let Prepared { grammar, registry } =
        run_common::prepare_grammar(&args.grammar, &IdentityTransformer);
    let colors = Colors::new(args.color);

    for rule in grammar.rules() {
        println!("{}{}{} = {};", colors.blue, rule.name(), colors.reset, rule.body);
    }
    println!("{}---{}", colors.dim, colors.reset);
    for (name, parser) in registry.iter() {
        println!("{}{}{} = {};", colors.blue, name, colors.reset, parser);
    }
}
