//! The single failure kind surfaced by every TMDB operation.
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = FetchError> = std::result::Result<T, E>;

/// Returned whenever a request to TMDB does not produce a JSON payload.
///
/// The display text is always the same so callers that only report the
/// message see one failure kind. The underlying reason is kept in
/// [`FetchCause`] and exposed through `source()`.
#[derive(Debug, Error)]
#[error("Failed to fetch data from TMDB")]
pub struct FetchError {
    #[source]
    cause: FetchCause,
}

#[derive(Debug, Error)]
pub enum FetchCause {
    /// Connection, TLS or timeout failure. The request URL is stripped so
    /// the credential never leaks through the error chain.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("TMDB responded with HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON parse failed: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    pub fn cause(&self) -> &FetchCause {
        &self.cause
    }

    pub fn into_cause(self) -> FetchCause {
        self.cause
    }

    /// Upstream HTTP status, when the failure was a non-2xx response.
    pub fn status(&self) -> Option<StatusCode> {
        match &self.cause {
            FetchCause::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<FetchCause> for FetchError {
    fn from(cause: FetchCause) -> Self {
        Self { cause }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchCause::Transport(err.without_url()).into()
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchCause::Decode(err).into()
    }
}
