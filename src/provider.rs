//! GitHub Data Provider Abstraction
//!
//! The virtual filesystem never talks to the network directly. Every fetch goes
//! through [`DataProvider`], which the entry point constructs once and passes
//! explicitly into population and resolution. Tests substitute an in-memory
//! double; production uses [`github::GitHubClient`].

use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod github;
pub mod trending;


/// Maximum number of search results requested from the provider.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Time window for the trending page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl TrendingPeriod {
    /// Value of the `since` query parameter on github.com/trending
    pub fn as_query(&self) -> &'static str {
        match self {
            TrendingPeriod::Daily => "daily",
            TrendingPeriod::Weekly => "weekly",
            TrendingPeriod::Monthly => "monthly",
        }
    }
}

impl fmt::Display for TrendingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for TrendingPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" | "today" => Ok(TrendingPeriod::Daily),
            "weekly" => Ok(TrendingPeriod::Weekly),
            "monthly" => Ok(TrendingPeriod::Monthly),
            _ => Err(format!(
                "Invalid period: {}. Must be daily, weekly, or monthly",
                s
            )),
        }
    }
}

/// One entry of the trending page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// `owner/repo`
    pub identifier: String,
    pub language: Option<String>,
    pub stars: u64,
}

impl ProjectSummary {
    /// Split the identifier into `(owner, repo)`.
    pub fn owner_and_repo(&self) -> Option<(&str, &str)> {
        let (owner, repo) = self.identifier.split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some((owner, repo))
    }
}

/// A GitHub account as returned by the users endpoints
///
/// The listing endpoint only fills `login`; the single-user endpoint fills the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub login: String,
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub following: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub public_repos: Option<u64>,
}

impl UserSummary {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            ..Self::default()
        }
    }
}

/// A repository as returned by the repos endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default, rename = "stargazers_count")]
    pub stars: Option<u64>,
    #[serde(default, rename = "forks_count")]
    pub forks: Option<u64>,
    #[serde(default, rename = "open_issues_count")]
    pub open_issues: Option<u64>,
    #[serde(default, rename = "watchers_count")]
    pub watchers: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub pushed_at: Option<String>,
}

impl RepoSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One entry of the trending developers page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperSummary {
    pub login: String,
    pub display_name: Option<String>,
}

impl DeveloperSummary {
    /// Display name when the profile has one, else the login.
    pub fn display(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.login)
    }
}

/// What lives at a path inside a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoContents {
    /// Decoded file text
    File(String),
    /// Paths of the entries, relative to the repository root
    Directory(Vec<String>),
}

/// Source of GitHub data for the virtual filesystem
///
/// Every call blocks until the remote answers. Implementations report a missing
/// user, repository or README as [`ProviderError::NotFound`].
pub trait DataProvider {
    /// Trending repositories, in page order
    fn list_trending_projects(
        &self,
        period: TrendingPeriod,
    ) -> Result<Vec<ProjectSummary>, ProviderError>;

    /// The first page of all GitHub accounts
    fn list_all_users(&self) -> Result<Vec<UserSummary>, ProviderError>;

    fn get_user(&self, login: &str) -> Result<UserSummary, ProviderError>;

    fn list_user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ProviderError>;

    /// Decoded README text of `owner/repo`
    fn get_readme(&self, owner: &str, repo: &str) -> Result<String, ProviderError>;

    fn get_repo(&self, owner: &str, repo: &str) -> Result<RepoSummary, ProviderError> {
        let _ = (owner, repo);
        Err(ProviderError::Unsupported("get_repo".to_string()))
    }

    fn search_users(&self, query: &str) -> Result<Vec<UserSummary>, ProviderError> {
        let _ = query;
        Err(ProviderError::Unsupported("search_users".to_string()))
    }

    fn search_repos(&self, query: &str) -> Result<Vec<RepoSummary>, ProviderError> {
        let _ = query;
        Err(ProviderError::Unsupported("search_repos".to_string()))
    }

    /// Trending developers, in page order
    fn list_trending_developers(
        &self,
        period: TrendingPeriod,
    ) -> Result<Vec<DeveloperSummary>, ProviderError> {
        let _ = period;
        Err(ProviderError::Unsupported(
            "list_trending_developers".to_string(),
        ))
    }

    /// File text or directory listing at `path` in `owner/repo`
    fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<RepoContents, ProviderError> {
        let _ = (owner, repo, path);
        Err(ProviderError::Unsupported("get_contents".to_string()))
    }
}

impl<P: DataProvider + ?Sized> DataProvider for Box<P> {
    fn list_trending_projects(
        &self,
        period: TrendingPeriod,
    ) -> Result<Vec<ProjectSummary>, ProviderError> {
        (**self).list_trending_projects(period)
    }

    fn list_all_users(&self) -> Result<Vec<UserSummary>, ProviderError> {
        (**self).list_all_users()
    }

    fn get_user(&self, login: &str) -> Result<UserSummary, ProviderError> {
        (**self).get_user(login)
    }

    fn list_user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ProviderError> {
        (**self).list_user_repos(login)
    }

    fn get_readme(&self, owner: &str, repo: &str) -> Result<String, ProviderError> {
        (**self).get_readme(owner, repo)
    }

    fn get_repo(&self, owner: &str, repo: &str) -> Result<RepoSummary, ProviderError> {
        (**self).get_repo(owner, repo)
    }

    fn search_users(&self, query: &str) -> Result<Vec<UserSummary>, ProviderError> {
        (**self).search_users(query)
    }

    fn search_repos(&self, query: &str) -> Result<Vec<RepoSummary>, ProviderError> {
        (**self).search_repos(query)
    }

    fn list_trending_developers(
        &self,
        period: TrendingPeriod,
    ) -> Result<Vec<DeveloperSummary>, ProviderError> {
        (**self).list_trending_developers(period)
    }

    fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<RepoContents, ProviderError> {
        (**self).get_contents(owner, repo, path)
    }
}
