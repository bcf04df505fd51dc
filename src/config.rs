//! Configuration System
//!
//! Layered configuration for the GitHub provider, the interactive shell and
//! logging. Sources are merged by [`ConfigLoader`]: built-in defaults, then the
//! global config file, then `GISH__*` environment variables.

use crate::error::GishError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GishConfig {
    /// GitHub endpoints and HTTP client settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Interactive shell settings
    #[serde(default)]
    pub shell: ShellConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub endpoints and HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// REST API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Web origin used to build node URLs
    #[serde(default = "default_web_url")]
    pub web_url: String,

    /// Trending page URL
    #[serde(default = "default_trending_url")]
    pub trending_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

pub(crate) fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

pub(crate) fn default_web_url() -> String {
    crate::tree::DEFAULT_WEB_ORIGIN.to_string()
}

pub(crate) fn default_trending_url() -> String {
    "https://github.com/trending".to_string()
}

pub(crate) fn default_user_agent() -> String {
    format!("gish/{}", env!("CARGO_PKG_VERSION"))
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            web_url: default_web_url(),
            trending_url: default_trending_url(),
            user_agent: default_user_agent(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Interactive shell settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt prefix; the current directory is appended
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Colorize directory names in listings
    #[serde(default = "default_true")]
    pub color: bool,

    /// Command used by `open` instead of the platform opener
    #[serde(default)]
    pub browser: Option<String>,
}

pub(crate) fn default_prompt() -> String {
    "gish:".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            color: default_true(),
            browser: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    GitHub(String),
    Shell(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::GitHub(msg) => write!(f, "GitHub: {}", msg),
            ValidationError::Shell(msg) => write!(f, "Shell: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl GitHubConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (key, value) in [
            ("api_url", &self.api_url),
            ("web_url", &self.web_url),
            ("trending_url", &self.trending_url),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} cannot be empty", key));
            }
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(format!("{} must be an http(s) URL, got '{}'", key, value));
            }
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent cannot be empty".to_string());
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err("timeouts must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl GishConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.github.validate() {
            errors.push(ValidationError::GitHub(e));
        }
        if let Some(browser) = &self.shell.browser {
            if browser.trim().is_empty() {
                errors.push(ValidationError::Shell(
                    "browser command cannot be empty".to_string(),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all errors into one `GishError`.
    pub fn ensure_valid(&self) -> Result<(), GishError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            GishError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }
}
