//! Parse text and print the token tree as JSON.

use combinate_lib::RuleNamingTransformer;

use super::run_common::{self, PreparedRun, RunInput};

pub struct ExecArgs {
    pub run: RunInput,
    pub pretty: bool,
}

pub fn run(args: ExecArgs) {
    let PreparedRun {
        registry,
        rule,
        source,
    } = run_common::prepare_run(&args.run, &RuleNamingTransformer);

    let token = match registry.parse(&rule, &source) {
        Ok(Some(token)) => token,
        Ok(None) => {
            eprintln!("{}", run_common::no_match_message(&rule));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            std::process::exit(2);
        }
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&token)
    } else {
        serde_json::to_string(&token)
    };

    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
