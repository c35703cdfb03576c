use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a Spotify call.
///
/// Transient failures (network trouble, 5xx, rate limits) may succeed when
/// retried later; permanent ones will not.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Spotify credentials are not configured")]
    NotConfigured,

    #[error("Not authenticated with Spotify")]
    NotAuthenticated,

    #[error("Spotify rate limit exceeded, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Spotify is temporarily unavailable: {0}")]
    Transient(String),

    #[error("Spotify request failed: {0}")]
    Permanent(String),
}

impl CatalogError {
    pub fn is_transient(&self) -> bool {
        matches!(self, CatalogError::Transient(_) | CatalogError::RateLimited(_))
    }

    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let message = format!("{status}: {}", body.trim());
        match status {
            StatusCode::UNAUTHORIZED => CatalogError::NotAuthenticated,
            StatusCode::TOO_MANY_REQUESTS => CatalogError::RateLimited(0),
            s if s.is_server_error() => CatalogError::Transient(message),
            _ => CatalogError::Permanent(message),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return CatalogError::from_status(status, &err.to_string());
        }

        if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
            CatalogError::Transient(err.to_string())
        } else {
            CatalogError::Permanent(err.to_string())
        }
    }
}
