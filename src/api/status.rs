use axum::{Json, extract::State};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::{server::AppState, types::StatusResponse};

/// Reports whether the caller is authenticated.
///
/// A stored credential only counts if the profile lookup with it succeeds.
pub async fn status(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Json<StatusResponse>) {
    let (jar, session_id) = state.sessions.identify(jar);

    let Some(credential) = state.sessions.credential(&session_id).await else {
        return (
            jar,
            Json(StatusResponse {
                authenticated: false,
                user: None,
            }),
        );
    };

    let mut catalog = state.catalog.session(Some(credential.clone()));
    let response = match catalog.current_user().await {
        Ok(user) => StatusResponse {
            authenticated: true,
            user: Some(user),
        },
        Err(e) => {
            tracing::debug!(error = %e, "stored credential is not usable");
            StatusResponse {
                authenticated: false,
                user: None,
            }
        }
    };

    state
        .sessions
        .sync_credential(&session_id, &credential, catalog.credential())
        .await;

    (jar, Json(response))
}
