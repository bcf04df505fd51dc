//! CLI route: single route table and run context. Dispatches to the shell
//! session, the data provider and presentation.

use crate::config::{ConfigLoader, GishConfig};
use crate::error::GishError;
use crate::provider::github::GitHubClient;
use crate::provider::{DataProvider, SEARCH_RESULT_LIMIT};
use crate::shell::{run_repl, Session};
use crate::tree::{Tree, TRENDING_LIMIT};
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_repo_contents, format_repo_search, format_repo_summary, format_trending_developers,
    format_trending_table, format_user_search, format_user_summary,
};

/// Split `owner/repo`, rejecting anything else.
pub fn split_repo_name(name: &str) -> Result<(&str, &str), GishError> {
    match name.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner, repo))
        }
        _ => Err(GishError::Usage(format!(
            "expected owner/repo, got '{}'",
            name
        ))),
    }
}

/// Split `owner/repo/path`; the path may contain further slashes.
pub fn split_file_location(location: &str) -> Result<(&str, &str, &str), GishError> {
    let mut parts = location.splitn(3, '/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(repo), Some(path))
            if !owner.is_empty() && !repo.is_empty() && !path.trim_matches('/').is_empty() =>
        {
            Ok((owner, repo, path))
        }
        _ => Err(GishError::Usage(format!(
            "expected owner/repo/path, got '{}'",
            location
        ))),
    }
}

/// Runtime context for CLI execution: configuration and one session over the
/// virtual tree.
pub struct RunContext {
    config: GishConfig,
    session: Session,
}

impl RunContext {
    /// Load configuration (explicit file or layered defaults) and connect the
    /// GitHub provider.
    pub fn new(config_path: Option<&Path>, no_color: bool) -> Result<Self, GishError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        config.ensure_valid()?;
        let provider = GitHubClient::new(&config.github)?;
        info!(api_url = %provider.api_url(), "GitHub provider ready");
        Ok(Self::with_provider(config, Box::new(provider), no_color))
    }

    /// Build a context around an existing provider.
    pub fn with_provider(
        mut config: GishConfig,
        provider: Box<dyn DataProvider>,
        no_color: bool,
    ) -> Self {
        if no_color {
            config.shell.color = false;
        }
        let tree = Tree::with_web_origin(config.github.web_url.clone());
        let session = Session::new(tree, provider, config.shell.clone());
        Self { config, session }
    }

    pub fn config(&self) -> &GishConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    fn color(&self) -> bool {
        self.config.shell.color
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&mut self, command: &Commands) -> Result<String, GishError> {
        debug!(command = command_name(command), "Executing command");
        match command {
            Commands::Ls { path } => self.session.ls(path.as_deref()),
            Commands::Cat { path } => self.session.cat(path),
            Commands::Open { path } => {
                self.session.open(path.as_deref())?;
                Ok(String::new())
            }
            Commands::Url { path } => self.session.url(path.as_deref()),
            Commands::TrendingRepos { since } => {
                let mut projects = self.provider().list_trending_projects(*since)?;
                projects.truncate(TRENDING_LIMIT);
                Ok(format_trending_table(&projects))
            }
            Commands::TrendingUsers { since } => {
                let mut developers = self.provider().list_trending_developers(*since)?;
                developers.truncate(TRENDING_LIMIT);
                Ok(format_trending_developers(&developers))
            }
            Commands::UserSummary { login } => {
                let user = self.provider().get_user(login)?;
                Ok(format_user_summary(&user, self.color()))
            }
            Commands::RepoSummary { name } => {
                let (owner, repo) = split_repo_name(name)?;
                let summary = self.provider().get_repo(owner, repo)?;
                Ok(format_repo_summary(&summary, self.color()))
            }
            Commands::ViewFile { location } => {
                let (owner, repo, path) = split_file_location(location)?;
                let contents = self.provider().get_contents(owner, repo, path)?;
                Ok(format_repo_contents(&contents))
            }
            Commands::Readme { name } => {
                let (owner, repo) = split_repo_name(name)?;
                Ok(self.provider().get_readme(owner, repo)?)
            }
            Commands::SearchUsers { query } => {
                let mut users = self.provider().search_users(query)?;
                users.truncate(SEARCH_RESULT_LIMIT);
                Ok(format_user_search(&users))
            }
            Commands::SearchRepos { query } => {
                let mut repos = self.provider().search_repos(query)?;
                repos.truncate(SEARCH_RESULT_LIMIT);
                Ok(format_repo_search(&repos))
            }
            Commands::Repl => {
                let stdin = io::stdin();
                let mut stdout = io::stdout();
                let mut stderr = io::stderr();
                run_repl(&mut self.session, stdin.lock(), &mut stdout, &mut stderr)?;
                Ok(String::new())
            }
        }
    }

    fn provider(&self) -> &dyn DataProvider {
        self.session.provider()
    }
}
