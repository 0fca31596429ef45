pub mod check;
pub mod dump;
pub mod exec;
pub mod grammar_loader;
pub mod run_common;
pub mod trace;
