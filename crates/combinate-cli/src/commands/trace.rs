//! Trace a parse for debugging.

use combinate_core::Colors;
use combinate_lib::{PrintTracer, RuleNamingTransformer, Verbosity};

use super::run_common::{self, PreparedRun, RunInput};

pub struct TraceArgs {
    pub run: RunInput,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let PreparedRun {
        registry,
        rule,
        source,
    } = run_common::prepare_run(&args.run, &RuleNamingTransformer);

    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(args.verbosity, colors);

    let token = match registry.parse_with(&rule, &source, &mut tracer) {
        Ok(Some(token)) => {
            tracer.print();
            token
        }
        Ok(None) => {
            tracer.print();
            eprintln!("{}", run_common::no_match_message(&rule));
            std::process::exit(1);
        }
        Err(e) => {
            tracer.print();
            eprintln!("runtime error: {e}");
            std::process::exit(2);
        }
    };

    println!("{}---{}", colors.dim, colors.reset);
    print!("{token}");
}
