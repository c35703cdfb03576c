use super::{CatalogError, CatalogSession};
use crate::types::{
    AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
    CreatePlaylistResponse, CreatedPlaylist,
};

/// Spotify accepts at most 100 items per add call.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

impl CatalogSession {
    /// Creates an empty playlist owned by the current user.
    pub async fn create_playlist(
        &mut self,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<CreatedPlaylist, CatalogError> {
        let user = self.current_user().await?;
        let token = self.access_token().await?;

        let request = self
            .catalog
            .http
            .post(self.catalog.endpoint(&format!("users/{}/playlists", user.id)))
            .bearer_auth(token)
            .json(&CreatePlaylistRequest {
                name: name.to_string(),
                description: description.to_string(),
                public,
            });

        let response = self.catalog.send(request).await?;
        let playlist = response.json::<CreatePlaylistResponse>().await?;
        tracing::info!(id = %playlist.id, name = %playlist.name, "playlist created");

        Ok(playlist.into())
    }

    /// Adds tracks in chunks of [`MAX_TRACKS_PER_REQUEST`], preserving order.
    ///
    /// Stops at the first failing chunk. Returns the number of add calls made.
    pub async fn add_tracks(
        &mut self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<usize, CatalogError> {
        let mut calls = 0;

        for chunk in uris.chunks(MAX_TRACKS_PER_REQUEST) {
            let token = self.access_token().await?;
            let request = self
                .catalog
                .http
                .post(
                    self.catalog
                        .endpoint(&format!("playlists/{playlist_id}/tracks")),
                )
                .bearer_auth(token)
                .json(&AddTrackToPlaylistRequest {
                    uris: chunk.to_vec(),
                });

            let response = self.catalog.send(request).await.inspect_err(|e| {
                tracing::error!(playlist_id, chunk = calls, error = %e, "adding tracks failed")
            })?;
            let snapshot = response.json::<AddTrackToPlaylistResponse>().await?;
            tracing::debug!(playlist_id, snapshot = %snapshot.snapshot_id, count = chunk.len(), "tracks added");
            calls += 1;
        }

        Ok(calls)
    }
}
