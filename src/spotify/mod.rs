//! # Spotify Integration Module
//!
//! This module is the bridge's only way into the Spotify Web API. It wraps the
//! OAuth 2.0 authorization-code flow, track search, playlist creation and
//! adding items to a playlist.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! CatalogSession  (one per request, owns the caller's Credential)
//!          ↓
//! Catalog         (shared: HTTP client, endpoints, app credentials, throttle)
//!          ↓
//! Spotify Web API
//! ```
//!
//! [`Catalog`] is created once at startup and cloned cheaply. Each request
//! builds a [`CatalogSession`] from the credential stored in the caller's
//! session record, so callers with different accounts never share a token.
//! When a call refreshes the token, the handler writes the new credential
//! back into the session record.
//!
//! ## Submodules
//!
//! - [`auth`] - authorize URL, code exchange and token refresh
//! - [`search`] - cleaned, progressively looser track search
//! - [`playlist`] - playlist creation and chunked item adds
//! - [`user`] - current user profile
//! - [`throttle`] - token-bucket limiter shared by all searches
//!
//! ## Errors
//!
//! Every operation returns [`CatalogError`]. A search miss is not an error:
//! it is `Ok(None)`.
//!
//! ## Rate Limiting
//!
//! Searches wait on the shared token bucket before each request. A `429 Too
//! Many Requests` answer whose `Retry-After` is at most 120 seconds is waited
//! out and retried once; anything else surfaces as
//! [`CatalogError::RateLimited`].

pub mod auth;
mod error;
pub mod playlist;
pub mod search;
pub mod throttle;
pub mod user;

pub use error::CatalogError;
pub use throttle::SearchThrottle;

use std::{sync::Arc, time::Duration};

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::time::sleep;

use crate::{
    config::{Settings, SpotifyCredentials},
    types::Credential,
};

/// Longest `Retry-After` the client is willing to wait for.
pub const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Shared, credential-free part of the Spotify client.
#[derive(Clone)]
pub struct Catalog {
    http: Client,
    credentials: Option<SpotifyCredentials>,
    redirect_uri: String,
    auth_url: String,
    token_url: String,
    api_url: String,
    throttle: Arc<SearchThrottle>,
}

impl Catalog {
    pub fn new(settings: &Settings) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(settings.http_timeout).build()?;

        Ok(Self {
            http,
            credentials: settings.credentials.clone(),
            redirect_uri: settings.redirect_uri.clone(),
            auth_url: settings.auth_url.clone(),
            token_url: settings.token_url.clone(),
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            throttle: Arc::new(SearchThrottle::per_second(settings.search_rate_per_second)),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Starts a session for one caller.
    pub fn session(&self, credential: Option<Credential>) -> CatalogSession {
        CatalogSession {
            catalog: self.clone(),
            credential,
        }
    }

    fn credentials(&self) -> Result<&SpotifyCredentials, CatalogError> {
        self.credentials.as_ref().ok_or(CatalogError::NotConfigured)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Sends a request and turns non-2xx answers into [`CatalogError`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, CatalogError> {
        let retry = request.try_clone();
        let response = request.send().await?;

        if response.status() != StatusCode::TOO_MANY_REQUESTS {
            return check_status(response).await;
        }

        let retry_after = retry_after_secs(&response);
        match (retry, retry_after) {
            (Some(retry), Some(secs)) if secs <= MAX_RETRY_AFTER_SECS => {
                tracing::warn!(secs, "rate limited by Spotify, waiting before retry");
                sleep(Duration::from_secs(secs)).await;
                check_status(retry.send().await?).await
            }
            (_, secs) => {
                let secs = secs.unwrap_or(0);
                tracing::warn!(
                    secs,
                    "Spotify retry-after is too high or missing, giving up on request"
                );
                Err(CatalogError::RateLimited(secs))
            }
        }
    }
}

/// A caller's view of the catalog: the shared client plus their credential.
pub struct CatalogSession {
    catalog: Catalog,
    credential: Option<Credential>,
}

impl CatalogSession {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Current credential, possibly refreshed during this session.
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

async fn check_status(response: Response) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CatalogError::from_status(status, &body))
}

fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}
