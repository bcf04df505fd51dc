//! GitHub REST API client
//!
//! Implements [`DataProvider`] over the public GitHub REST API (no
//! authentication) plus the scraped trending page. The client owns a
//! current-thread tokio runtime and blocks on every request, so callers stay
//! synchronous.

use crate::config::GitHubConfig;
use crate::error::ProviderError;
use crate::provider::trending::{parse_trending_developers, parse_trending_page};
use crate::provider::{
    DataProvider, DeveloperSummary, ProjectSummary, RepoContents, RepoSummary, TrendingPeriod,
    UserSummary, SEARCH_RESULT_LIMIT,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, instrument};

const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw";
const HTML_MEDIA_TYPE: &str = "text/html";

// Helper function to map HTTP errors to ProviderError
fn map_http_error(error: reqwest::Error) -> ProviderError {
    if let Some(status) = error.status() {
        map_status(status, &error.to_string())
    } else if error.is_timeout() {
        ProviderError::RequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ProviderError::RequestFailed(format!("Connection error: {}", error))
    } else if error.is_decode() {
        ProviderError::Decode(error.to_string())
    } else {
        ProviderError::RequestFailed(format!("HTTP error: {}", error))
    }
}

/// Map a non-success status to the provider error taxonomy.
pub(crate) fn map_status(status: StatusCode, detail: &str) -> ProviderError {
    match status.as_u16() {
        404 => ProviderError::NotFound(detail.to_string()),
        403 | 429 => ProviderError::RateLimited(format!("status {}: {}", status, detail)),
        _ => ProviderError::RequestFailed(format!(
            "Request failed with status {}: {}",
            status, detail
        )),
    }
}

fn build_http_client(config: &GitHubConfig) -> Result<Client, ProviderError> {
    let mut headers = HeaderMap::new();
    let agent = HeaderValue::from_str(&config.user_agent)
        .map_err(|e| ProviderError::Runtime(format!("Invalid user agent: {}", e)))?;
    headers.insert(USER_AGENT, agent);
    headers.insert("x-github-api-version", HeaderValue::from_static("2022-11-28"));

    Client::builder()
        .no_proxy()
        .default_headers(headers)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| ProviderError::Runtime(format!("Failed to create HTTP client: {}", e)))
}

#[derive(Deserialize)]
struct SearchResponse<T> {
    items: Vec<T>,
}

/// Body of the contents endpoint: an array for directories, an object for files
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    Directory(Vec<ContentEntry>),
    File(FileContent),
}

#[derive(Deserialize)]
struct ContentEntry {
    path: String,
}

#[derive(Deserialize)]
struct FileContent {
    path: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

/// Decode the inline content of a file payload.
fn decode_file_content(file: &FileContent) -> Result<String, ProviderError> {
    match (file.encoding.as_deref(), file.content.as_deref()) {
        (Some("base64"), Some(content)) => {
            let compact: String = content.split_whitespace().collect();
            let bytes = STANDARD
                .decode(compact)
                .map_err(|e| ProviderError::Decode(format!("{}: {}", file.path, e)))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        (encoding, _) => Err(ProviderError::Decode(format!(
            "{}: no inline content (encoding {})",
            file.path,
            encoding.unwrap_or("none")
        ))),
    }
}

fn parse_base(name: &str, raw: &str) -> Result<Url, ProviderError> {
    let url = Url::parse(raw)
        .map_err(|e| ProviderError::Runtime(format!("Invalid {} '{}': {}", name, raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(ProviderError::Runtime(format!(
            "Invalid {} '{}': not a base URL",
            name, raw
        )));
    }
    Ok(url)
}

/// `base` with `segments` appended, each percent-encoded as one path segment.
fn join_segments<'a>(base: &Url, segments: impl IntoIterator<Item = &'a str>) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Blocking GitHub data provider
pub struct GitHubClient {
    client: Client,
    runtime: Runtime,
    api_url: Url,
    trending_url: Url,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self, ProviderError> {
        let api_url = parse_base("API URL", &config.api_url)?;
        let trending_url = parse_base("trending URL", &config.trending_url)?;
        let client = build_http_client(config)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ProviderError::Runtime(format!("Failed to create runtime: {}", e)))?;

        Ok(Self {
            client,
            runtime,
            api_url,
            trending_url,
        })
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_str().trim_end_matches('/')
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        join_segments(&self.api_url, segments)
    }

    async fn fetch(
        &self,
        url: Url,
        query: &[(&str, &str)],
        accept: &str,
    ) -> Result<String, ProviderError> {
        debug!(url = %url, ?query, "GET");
        let response = self
            .client
            .get(url.clone())
            .query(query)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status(status, &format!("{} ({})", url, error_text.trim())));
        }

        response.text().await.map_err(map_http_error)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let body = self.block_on(self.fetch(url.clone(), query, JSON_MEDIA_TYPE))?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(format!("{}: {}", url, e)))
    }

    fn get_trending_html(&self, url: Url, period: TrendingPeriod) -> Result<String, ProviderError> {
        self.block_on(self.fetch(url, &[("since", period.as_query())], HTML_MEDIA_TYPE))
    }
}

impl DataProvider for GitHubClient {
    #[instrument(skip(self))]
    fn list_trending_projects(
        &self,
        period: TrendingPeriod,
    ) -> Result<Vec<ProjectSummary>, ProviderError> {
        let html = self.get_trending_html(self.trending_url.clone(), period)?;
        let projects = parse_trending_page(&html);
        debug!(count = projects.len(), "Parsed trending page");
        Ok(projects)
    }

    #[instrument(skip(self))]
    fn list_all_users(&self) -> Result<Vec<UserSummary>, ProviderError> {
        self.get_json(self.endpoint(["users"]), &[])
    }

    #[instrument(skip(self))]
    fn get_user(&self, login: &str) -> Result<UserSummary, ProviderError> {
        self.get_json(self.endpoint(["users", login]), &[])
    }

    #[instrument(skip(self))]
    fn list_user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ProviderError> {
        self.get_json(self.endpoint(["users", login, "repos"]), &[("per_page", "100")])
    }

    #[instrument(skip(self))]
    fn get_readme(&self, owner: &str, repo: &str) -> Result<String, ProviderError> {
        let url = self.endpoint(["repos", owner, repo, "readme"]);
        self.block_on(self.fetch(url, &[], RAW_MEDIA_TYPE))
    }

    #[instrument(skip(self))]
    fn get_repo(&self, owner: &str, repo: &str) -> Result<RepoSummary, ProviderError> {
        self.get_json(self.endpoint(["repos", owner, repo]), &[])
    }

    #[instrument(skip(self))]
    fn search_users(&self, query: &str) -> Result<Vec<UserSummary>, ProviderError> {
        let per_page = SEARCH_RESULT_LIMIT.to_string();
        let response: SearchResponse<UserSummary> = self.get_json(
            self.endpoint(["search", "users"]),
            &[("q", query), ("per_page", per_page.as_str())],
        )?;
        Ok(response.items)
    }

    #[instrument(skip(self))]
    fn search_repos(&self, query: &str) -> Result<Vec<RepoSummary>, ProviderError> {
        let per_page = SEARCH_RESULT_LIMIT.to_string();
        let response: SearchResponse<RepoSummary> = self.get_json(
            self.endpoint(["search", "repositories"]),
            &[("q", query), ("per_page", per_page.as_str())],
        )?;
        Ok(response.items)
    }

    #[instrument(skip(self))]
    fn list_trending_developers(
        &self,
        period: TrendingPeriod,
    ) -> Result<Vec<DeveloperSummary>, ProviderError> {
        let url = join_segments(&self.trending_url, ["developers"]);
        let html = self.get_trending_html(url, period)?;
        let developers = parse_trending_developers(&html);
        debug!(count = developers.len(), "Parsed trending developers page");
        Ok(developers)
    }

    #[instrument(skip(self))]
    fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<RepoContents, ProviderError> {
        let url = self.endpoint(
            ["repos", owner, repo, "contents"]
                .into_iter()
                .chain(path.split('/').filter(|s| !s.is_empty())),
        );
        match self.get_json(url, &[])? {
            ContentsResponse::Directory(entries) => Ok(RepoContents::Directory(
                entries.into_iter().map(|e| e.path).collect(),
            )),
            ContentsResponse::File(file) => decode_file_content(&file).map(RepoContents::File),
        }
    }
}
