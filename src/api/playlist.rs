use axum::{Json, body::Bytes, extract::State};
use axum_extra::extract::cookie::SignedCookieJar;

use super::{ApiError, chart_failure, non_empty, parse_date_param, require_credential};
use crate::{
    server::AppState,
    spotify::CatalogError,
    types::{BuildPlaylistRequest, PlaylistReport, PlaylistResult},
    utils,
};

/// Builds a playlist from a chart.
///
/// Every chart entry is searched in order (throttled by the shared search
/// limiter) and lands in either `found_tracks` or `missing_tracks`. The
/// playlist is created even when nothing matched. The status is `success`
/// only if all found tracks were added.
pub async fn create_playlist(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    body: Bytes,
) -> Result<Json<PlaylistReport>, ApiError> {
    let (session_id, credential) = require_credential(&state, &jar).await?;

    let request = parse_body(&body)?;
    let date = parse_date_param(request.date.as_deref())?;
    let public = request.public.unwrap_or(true);
    let name =
        non_empty(request.playlist_name).unwrap_or_else(|| utils::default_playlist_name(date));

    let songs = state.charts.fetch(date).await.map_err(chart_failure)?;

    let mut catalog = state.catalog.session(Some(credential.clone()));
    let (found_tracks, missing_tracks) = catalog.match_entries(&songs).await;
    tracing::info!(
        total = songs.len(),
        found = found_tracks.len(),
        missing = missing_tracks.len(),
        "chart matched against catalog"
    );

    let created = catalog
        .create_playlist(&name, &utils::playlist_description(date), public)
        .await;
    let playlist = match created {
        Ok(playlist) => playlist,
        Err(e) => {
            state
                .sessions
                .sync_credential(&session_id, &credential, catalog.credential())
                .await;
            tracing::error!(error = %e, "playlist creation failed");
            return Err(match e {
                CatalogError::NotAuthenticated => ApiError::from(e),
                _ => ApiError::Internal("Failed to create Spotify playlist".to_string()),
            });
        }
    };

    let result = PlaylistResult {
        playlist,
        found_tracks,
        missing_tracks,
    };

    let uris = result.track_uris();
    let added = if uris.is_empty() {
        false
    } else {
        match catalog.add_tracks(&result.playlist.id, &uris).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "playlist created but not all tracks were added");
                false
            }
        }
    };

    state
        .sessions
        .sync_credential(&session_id, &credential, catalog.credential())
        .await;

    Ok(Json(PlaylistReport::new(result, added)))
}

fn parse_body(body: &[u8]) -> Result<BuildPlaylistRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(BuildPlaylistRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))
}
