//! Error types for the gish virtual filesystem and its GitHub data provider.

use thiserror::Error;

/// Data provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Operation not supported by this provider: {0}")]
    Unsupported(String),

    #[error("Provider runtime error: {0}")]
    Runtime(String),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound(_))
    }
}

/// Virtual filesystem errors
///
/// `path` always names the segment or node where resolution stopped.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("Bad path '{path}': {reason}")]
    BadPath { path: String, reason: String },

    #[error("No such file or directory: {path}")]
    NotFound {
        path: String,
        #[source]
        source: Option<ProviderError>,
    },

    #[error("Provider error at '{path}': {source}")]
    Provider {
        path: String,
        #[source]
        source: ProviderError,
    },
}

impl FsError {
    pub fn bad_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        FsError::BadPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        FsError::NotFound {
            path: path.into(),
            source: None,
        }
    }

    /// Wrap a provider failure; a provider 404 becomes `NotFound`.
    pub fn from_provider(path: impl Into<String>, source: ProviderError) -> Self {
        let path = path.into();
        if source.is_not_found() {
            FsError::NotFound {
                path,
                source: Some(source),
            }
        } else {
            FsError::Provider { path, source }
        }
    }
}

/// Top-level errors surfaced by the CLI and REPL
#[derive(Debug, Error)]
pub enum GishError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Usage(String),

    #[error("Failed to open browser: {0}")]
    Browser(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for GishError {
    fn from(err: config::ConfigError) -> Self {
        GishError::ConfigError(err.to_string())
    }
}
