//! # API Module
//!
//! HTTP handlers of the bridge service. Each handler composes the chart
//! fetcher and a per-request [`CatalogSession`](crate::spotify::CatalogSession)
//! into one of the service operations:
//!
//! | Route | Method | Handler |
//! |---|---|---|
//! | `/` | GET | [`index`] - capability listing |
//! | `/auth` | GET | [`auth`] - redirect to the Spotify consent screen |
//! | `/callback` | GET | [`callback`] - finish the OAuth exchange |
//! | `/api/charts` | GET | [`charts`] - scraped chart for an optional date |
//! | `/api/create_playlist` | POST | [`create_playlist`] - chart → playlist |
//! | `/api/status` | GET | [`status`] - authentication state of the caller |
//! | `/api/search_track` | GET | [`search_track`] - ad-hoc catalog search |
//!
//! ## Sessions
//!
//! Callers are told apart by a signed session cookie. Credentials live in the
//! [`SessionManager`](crate::management::SessionManager), never in the
//! cookie itself. Handlers that call Spotify write the credential back after
//! the call if the call refreshed or dropped it and nobody replaced it meanwhile.
//!
//! ## Errors
//!
//! Failures are rendered by [`ApiError`] as `{"error": "..."}` with a
//! matching status code.

mod auth;
mod charts;
mod error;
mod index;
mod playlist;
mod search;
mod status;

pub use auth::{auth, callback};
pub use charts::charts;
pub use error::ApiError;
pub use index::index;
pub use playlist::create_playlist;
pub use search::search_track;
pub use status::status;

use axum_extra::extract::cookie::SignedCookieJar;
use chrono::NaiveDate;

use crate::{
    chart::ChartError, management::SessionManager, server::AppState, types::Credential, utils,
};

/// Session id and credential of an authenticated caller, or 401.
async fn require_credential(
    state: &AppState,
    jar: &SignedCookieJar,
) -> Result<(String, Credential), ApiError> {
    let session_id = SessionManager::session_id(jar).ok_or_else(not_authenticated)?;
    let credential = state
        .sessions
        .credential(&session_id)
        .await
        .ok_or_else(not_authenticated)?;
    Ok((session_id, credential))
}

fn not_authenticated() -> ApiError {
    ApiError::Unauthorized("Not authenticated with Spotify".to_string())
}

/// Validates an optional `YYYY-MM-DD` parameter. Empty counts as absent.
fn parse_date_param(date: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        None => Ok(None),
        Some(date) => utils::parse_chart_date(date).map(Some).ok_or_else(|| {
            ApiError::BadRequest("Invalid date format. Use YYYY-MM-DD".to_string())
        }),
    }
}

fn chart_failure(err: ChartError) -> ApiError {
    tracing::error!(error = %err, "chart fetch failed");
    ApiError::Internal("Failed to fetch chart data".to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
