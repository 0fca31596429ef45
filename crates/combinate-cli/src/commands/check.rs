use combinate_lib::IdentityTransformer;

use super::run_common::{self, GrammarInput};

pub struct CheckArgs {
    pub grammar: GrammarInput,
}

pub fn run(args: CheckArgs) {
    run_common::prepare_grammar(&args.grammar, &IdentityTransformer);

    // Silent on success (like cargo check)
}
