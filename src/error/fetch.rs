use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("[Fetch] Failed to build http client: {0}")]
    ClientBuildError(reqwest::Error),

    #[error("[Fetch] Request to {url} failed: {source}")]
    RequestError {
        url:    String,
        source: reqwest::Error,
    },

    #[error("[Fetch] {url} returned status {status}")]
    StatusError {
        url:    String,
        status: StatusCode,
    },

    #[error("[Fetch] Failed to decode response from {url}: {source}")]
    DecodeError {
        url:    String,
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Timeouts, dropped connections, rate limiting and server errors are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::RequestError { source, .. } => source.is_timeout() || source.is_connect(),
            FetchError::StatusError { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            },
            FetchError::ClientBuildError(_) | FetchError::DecodeError { .. } => false,
        }
    }
}
