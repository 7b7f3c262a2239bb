//! Error types for the feed client.

use std::fmt;
use std::path::PathBuf;

/// Errors reported by the feed endpoint or the transport underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The server answered with a non-success status.
    Http { status: u16, message: String },
    /// Network/connection error, including timeouts.
    Network { message: String },
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            FeedError::Network { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for FeedError {}

impl FeedError {
    /// Returns true if this error is potentially retryable.
    ///
    /// The client never retries on its own; this is for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            FeedError::Network { .. } => true,
            FeedError::Http { status, .. } => *status == 429 || *status >= 500,
        }
    }

    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            FeedError::Network { .. } => 3,
            FeedError::Http { .. } => 2,
        }
    }
}

/// Top-level error type for feed operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Endpoint or transport failure.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// The body was not valid JSON.
    #[error("failed to decode feed: {0}")]
    Json(#[from] serde_json::Error),

    /// A local feed file could not be read.
    #[error("failed to read feed file '{path}': {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else {
            err.to_string()
        };
        Error::Feed(FeedError::Network { message })
    }
}

impl Error {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Feed(e) => e.exit_code(),
            Error::Json(_) => 1,
            Error::Read { .. } => 3,
            Error::Client(_) => 5,
        }
    }
}

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, Error>;
