use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;

use super::{ApiError, non_empty, require_credential};
use crate::{
    server::AppState,
    types::{SearchStatus, SearchTrackResponse},
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    title: Option<String>,
    artist: Option<String>,
}

pub async fn search_track(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchTrackResponse>, ApiError> {
    // parameters first: a missing one is a 400 whether or not the caller is logged in
    let (Some(title), Some(artist)) = (non_empty(params.title), non_empty(params.artist)) else {
        return Err(ApiError::BadRequest(
            "Title and artist required".to_string(),
        ));
    };

    let (session_id, credential) = require_credential(&state, &jar).await?;

    let mut catalog = state.catalog.session(Some(credential.clone()));
    let result = catalog.search_track(&title, &artist).await;
    state
        .sessions
        .sync_credential(&session_id, &credential, catalog.credential())
        .await;

    let track = result?;
    let status = match track {
        Some(_) => SearchStatus::Found,
        None => SearchStatus::NotFound,
    };

    Ok(Json(SearchTrackResponse { status, track }))
}
