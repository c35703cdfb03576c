use super::{CatalogError, CatalogSession};
use crate::{
    types::{ChartEntry, FoundTrack, SearchResponse, Track, TrackMatch},
    utils,
};

/// Hits requested per query; only the top one is used.
const SEARCH_LIMIT: &str = "5";

impl From<Track> for TrackMatch {
    fn from(track: Track) -> Self {
        Self {
            uri: track.uri,
            name: track.name,
            artist: track
                .artists
                .into_iter()
                .next()
                .map(|a| a.name)
                .unwrap_or_default(),
            popularity: track.popularity,
        }
    }
}

impl CatalogSession {
    /// Finds the best catalog match for a chart entry.
    ///
    /// Both terms are reduced to word characters and whitespace, then up to
    /// four queries are tried from strictest to loosest. The first query with
    /// any hit decides the result.
    ///
    /// Returns `Ok(None)` when nothing matched, and also when the session is
    /// not authenticated yet.
    pub async fn search_track(
        &mut self,
        title: &str,
        artist: &str,
    ) -> Result<Option<TrackMatch>, CatalogError> {
        if !self.is_authenticated() {
            tracing::debug!(title, artist, "search skipped, session not authenticated");
            return Ok(None);
        }

        let title = utils::clean_search_term(title);
        let artist = utils::clean_search_term(artist);
        if title.is_empty() && artist.is_empty() {
            tracing::debug!("search terms empty after cleanup, nothing to search");
            return Ok(None);
        }

        for query in utils::build_search_queries(&title, &artist) {
            let token = self.access_token().await?;
            self.catalog.throttle.wait().await;

            let request = self
                .catalog
                .http
                .get(self.catalog.endpoint("search"))
                .bearer_auth(token)
                .query(&[
                    ("q", query.as_str()),
                    ("type", "track"),
                    ("limit", SEARCH_LIMIT),
                ]);

            let response = self.catalog.send(request).await?;
            let page = response.json::<SearchResponse>().await?;

            if let Some(track) = page.tracks.items.into_iter().next() {
                tracing::debug!(%query, uri = %track.uri, "track matched");
                return Ok(Some(TrackMatch::from(track)));
            }
        }

        tracing::debug!(%title, %artist, "no catalog match");
        Ok(None)
    }

    /// Searches every entry in order and splits them into found and missing.
    ///
    /// A failed search counts as missing; it is logged but does not stop the
    /// remaining entries.
    pub async fn match_entries(
        &mut self,
        entries: &[ChartEntry],
    ) -> (Vec<FoundTrack>, Vec<ChartEntry>) {
        let mut found = Vec::new();
        let mut missing = Vec::new();

        for entry in entries {
            match self.search_track(&entry.title, &entry.artist).await {
                Ok(Some(track)) => found.push(FoundTrack::new(entry.clone(), track)),
                Ok(None) => missing.push(entry.clone()),
                Err(e) => {
                    tracing::warn!(
                        position = entry.position,
                        title = %entry.title,
                        transient = e.is_transient(),
                        error = %e,
                        "search failed, treating entry as missing"
                    );
                    missing.push(entry.clone());
                }
            }
        }

        (found, missing)
    }
}
