mod cli;
mod commands;

use cli::{CheckParams, DumpParams, ExecParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("a subcommand is required");
    };

    match name {
        "check" => commands::check::run(CheckParams::from_matches(m).into()),
        "dump" => commands::dump::run(DumpParams::from_matches(m).into()),
        "exec" => commands::exec::run(ExecParams::from_matches(m).into()),
        "trace" => commands::trace::run(TraceParams::from_matches(m).into()),
        other => unreachable!("unknown subcommand `{other}`"),
    }
}
