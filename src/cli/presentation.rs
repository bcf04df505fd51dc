//! CLI presentation: text formatters for listings and GitHub data.

mod github;
mod listing;
mod shared;

pub use github::{
    format_repo_contents, format_repo_search, format_repo_summary, format_trending_developers,
    format_trending_table, format_user_search, format_user_summary,
};
pub use listing::{format_entry_name, format_listing};
pub use shared::{format_date, format_section_heading};
