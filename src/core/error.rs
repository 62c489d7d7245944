use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DashError {
    /// An error occurred during an HTTP request (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON for the expected envelope.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The endpoint does not exist on this server.
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The server asked us to slow down.
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429.
        url: String,
    },

    /// The server failed to handle the request.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The 5xx status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A request parameter was rejected before anything was sent.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl DashError {
    /// Maps a non-success status to the most specific variant.
    pub(crate) fn from_status(status: u16, url: impl Into<String>) -> Self {
        let url = url.into();
        match status {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status, url },
            _ => Self::Status { status, url },
        }
    }

    /// The HTTP status behind this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::ServerError { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
