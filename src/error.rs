use std::path::PathBuf;

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned when constructing a [`crate::Client`].
///
/// Only raised at construction time; once a client exists its configuration
/// can no longer fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The supplied configuration violated one or more constraints.
    /// Every violation is listed, not just the first one found.
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),

    /// The underlying HTTP client could not be built (e.g. TLS backend
    /// initialization failure).
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Error returned by API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connection refused, DNS, timeout). Carries no
    /// HTTP status; the request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status. `body` holds the remote
    /// error payload when the server sent one that parses as JSON.
    #[error("server returned HTTP {status}")]
    Status {
        status: u16,
        body: Option<serde_json::Value>,
    },

    /// A successful response carried a body that does not decode as the
    /// documented shape for the operation.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// A local file passed to an upload operation could not be opened.
    /// Raised before any request is sent.
    #[error("cannot read {path}: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status of the failed call, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened below the HTTP layer, as opposed to an
    /// application-level rejection by the server.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Transport(err)
        }
    }
}
