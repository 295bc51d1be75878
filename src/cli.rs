//! CLI domain: parse, route, output, and presentation only.
//! Store behavior lives in `hub` and `session`; this layer wires them to flags.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_records, format_summary};
pub use route::RunContext;
