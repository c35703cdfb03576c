use axum::{
    Json,
    extract::{Query, State},
    response::Redirect,
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;
use serde_json::{Value, json};

use super::{ApiError, non_empty};
use crate::{server::AppState, spotify::CatalogError};

/// Redirects the caller to the Spotify consent screen.
///
/// The login is bound to the caller's session through the OAuth `state`, so
/// the callback can store the credential there even when it arrives from a
/// different client (a browser opened by the CLI).
pub async fn auth(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Redirect), ApiError> {
    if !state.catalog.is_configured() {
        return Err(CatalogError::NotConfigured.into());
    }

    let (jar, session_id) = state.sessions.identify(jar);
    let login_state = state.sessions.begin_login(&session_id).await;
    let url = state.catalog.authorization_url(&login_state)?;

    Ok((jar, Redirect::to(url.as_str())))
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

pub async fn callback(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<(SignedCookieJar, Json<Value>), ApiError> {
    if let Some(error) = params.error {
        tracing::warn!(%error, "authorization was not granted");
        return Err(ApiError::BadRequest(format!("Authentication failed: {error}")));
    }

    let Some(code) = non_empty(params.code) else {
        return Err(ApiError::BadRequest(
            "Authentication failed: missing code".to_string(),
        ));
    };

    let (jar, own_session) = state.sessions.identify(jar);
    let session_id = match params.state {
        Some(login_state) => state
            .sessions
            .finish_login(&login_state)
            .await
            .unwrap_or(own_session),
        None => own_session,
    };

    let mut catalog = state.catalog.session(None);
    let credential = catalog
        .complete_authentication(&code)
        .await
        .map_err(|e| match e {
            CatalogError::NotConfigured => ApiError::from(e),
            _ => ApiError::BadRequest("Authentication failed".to_string()),
        })?;

    state.sessions.store_credential(&session_id, credential).await;

    Ok((
        jar,
        Json(json!({
            "status": "success",
            "message": "Authentication successful"
        })),
    ))
}
