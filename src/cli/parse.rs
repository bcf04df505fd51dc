//! CLI parse: clap types for gish. No behavior; definitions only.

use crate::provider::TrendingPeriod;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gish - Browse GitHub like it's your filesystem
#[derive(Parser)]
#[command(name = "gish")]
#[command(version)]
#[command(about = "Browse GitHub users, repositories and trending projects like a filesystem")]
pub struct Cli {
    /// Command to run; starts the interactive shell when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Cli {
    /// The command to run, defaulting to the interactive shell.
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Repl)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse contents of a virtual path
    Ls {
        /// Path to list (default: /)
        path: Option<String>,
    },
    /// Show a repository's README or a user's profile
    #[command(alias = "less")]
    Cat {
        /// Path of a repository or a user's info file
        path: String,
    },
    /// Open the GitHub page for a virtual path in the browser
    Open {
        /// Path to open (default: /)
        path: Option<String>,
    },
    /// Print the GitHub page for a virtual path
    Url {
        /// Path to show (default: /)
        path: Option<String>,
    },
    /// Print the top 25 trending repositories
    TrendingRepos {
        /// Time window (daily, weekly, monthly)
        #[arg(long, default_value = "daily")]
        since: TrendingPeriod,
    },
    /// Print the top 25 trending developers
    TrendingUsers {
        /// Time window (daily, weekly, monthly)
        #[arg(long, default_value = "daily")]
        since: TrendingPeriod,
    },
    /// Print information about a user
    UserSummary {
        /// User login
        login: String,
    },
    /// Print information about a repository
    RepoSummary {
        /// Repository in owner/repo form
        name: String,
    },
    /// Print a file, or list a directory, inside a repository
    ViewFile {
        /// Location in owner/repo/path form
        location: String,
    },
    /// Print a repository's README
    Readme {
        /// Repository in owner/repo form
        name: String,
    },
    /// Search users matching a query
    SearchUsers {
        query: String,
    },
    /// Search repositories matching a query
    SearchRepos {
        query: String,
    },
    /// Start the interactive shell
    Repl,
}
