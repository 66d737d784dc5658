//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; the route dispatches to the selection engine.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error};
pub use parse::Cli;
pub use presentation::format_outcome;
pub use route::RunContext;
