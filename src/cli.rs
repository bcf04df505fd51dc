//! CLI domain: parse, route, help, output, and presentation only.
//! Filesystem semantics live in `tree`; the interactive loop lives in `shell`.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{canonical_verb, command_name, repl_help, REPL_VERBS};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_date, format_entry_name, format_listing, format_repo_contents, format_repo_search,
    format_repo_summary, format_section_heading, format_trending_developers,
    format_trending_table, format_user_search, format_user_summary,
};
pub use route::{split_file_location, split_repo_name, RunContext};
