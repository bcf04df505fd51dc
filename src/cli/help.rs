//! CLI help and command-name contract for logging and the REPL.

use crate::cli::parse::Commands;
use crate::error::GishError;

/// REPL verbs and their one-line help, in display order.
pub const REPL_VERBS: &[(&str, &str)] = &[
    ("ls", "ls [path]\n\tBrowse contents."),
    ("cd", "cd [path]\n\tMove around the gish filesystem."),
    ("pwd", "pwd\n\tPrint the current directory."),
    (
        "cat",
        "cat <path>\n\tShow a repository's README or a user's profile. Alias: less.",
    ),
    ("open", "open [path]\n\tOpen the relevant GitHub page in your browser."),
    ("url", "url [path]\n\tPrint the GitHub page that 'open' would show."),
    ("help", "help [verb]\n\tList verbs, or describe one."),
    ("exit", "exit\n\tLeave the shell. Alias: quit."),
];

/// Canonical verb for an alias.
pub fn canonical_verb(verb: &str) -> &str {
    match verb {
        "less" => "cat",
        "quit" => "exit",
        other => other,
    }
}

/// Help text for the REPL, optionally for a single verb.
pub fn repl_help(verb: Option<&str>) -> Result<String, GishError> {
    match verb {
        None => {
            let mut out = String::from("gish - Browse GitHub like it's your filesystem.\n\n");
            for (_, text) in REPL_VERBS {
                out.push_str(text);
                out.push_str("\n\n");
            }
            out.push_str("Type 'help <verb>' to get help with a specific verb.");
            Ok(out)
        }
        Some(verb) => REPL_VERBS
            .iter()
            .find(|(name, _)| *name == canonical_verb(verb))
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| GishError::Usage(format!("help: unknown verb '{}'", verb))),
    }
}

/// Command name string for logging (e.g. "ls", "trending-repos").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Ls { .. } => "ls",
        Commands::Cat { .. } => "cat",
        Commands::Open { .. } => "open",
        Commands::Url { .. } => "url",
        Commands::TrendingRepos { .. } => "trending-repos",
        Commands::TrendingUsers { .. } => "trending-users",
        Commands::UserSummary { .. } => "user-summary",
        Commands::RepoSummary { .. } => "repo-summary",
        Commands::ViewFile { .. } => "view-file",
        Commands::Readme { .. } => "readme",
        Commands::SearchUsers { .. } => "search-users",
        Commands::SearchRepos { .. } => "search-repos",
        Commands::Repl => "repl",
    }
}
