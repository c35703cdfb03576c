use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One ranked song scraped from the chart page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub position: u32,
    pub title: String,
    pub artist: String,
}

/// Best catalog hit for a chart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMatch {
    /// Opaque Spotify handle (`spotify:track:...`) used when adding items.
    pub uri: String,
    pub name: String,
    pub artist: String,
    pub popularity: u32,
}

/// OAuth access/refresh token pair held in a caller's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// True when the access token expires within `seconds` from now.
    pub fn expires_within(&self, seconds: i64) -> bool {
        Utc::now() + Duration::seconds(seconds) >= self.expires_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub popularity: u32,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// A freshly created, still empty playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPlaylist {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl From<CreatePlaylistResponse> for CreatedPlaylist {
    fn from(resp: CreatePlaylistResponse) -> Self {
        Self {
            id: resp.id,
            name: resp.name,
            url: resp.external_urls.spotify,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundTrack {
    #[serde(flatten)]
    pub entry: ChartEntry,
    pub spotify_name: String,
    pub spotify_artist: String,
    pub uri: String,
}

impl FoundTrack {
    pub fn new(entry: ChartEntry, track: TrackMatch) -> Self {
        Self {
            entry,
            spotify_name: track.name,
            spotify_artist: track.artist,
            uri: track.uri,
        }
    }
}

/// Outcome of a playlist build. Every chart entry ends up in exactly one of
/// `found_tracks` or `missing_tracks`, in chart order.
#[derive(Debug, Clone)]
pub struct PlaylistResult {
    pub playlist: CreatedPlaylist,
    pub found_tracks: Vec<FoundTrack>,
    pub missing_tracks: Vec<ChartEntry>,
}

impl PlaylistResult {
    pub fn total(&self) -> usize {
        self.found_tracks.len() + self.missing_tracks.len()
    }

    pub fn track_uris(&self) -> Vec<String> {
        self.found_tracks.iter().map(|t| t.uri.clone()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    pub date: String,
    pub total_songs: usize,
    pub songs: Vec<ChartEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildPlaylistRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub playlist_name: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistStatus {
    Success,
    PartialSuccess,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistStats {
    pub total_songs: usize,
    pub found: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistReport {
    pub status: PlaylistStatus,
    pub playlist: CreatedPlaylist,
    pub stats: PlaylistStats,
    pub found_tracks: Vec<FoundTrack>,
    pub missing_tracks: Vec<ChartEntry>,
}

impl PlaylistReport {
    pub fn new(result: PlaylistResult, added: bool) -> Self {
        Self {
            status: if added {
                PlaylistStatus::Success
            } else {
                PlaylistStatus::PartialSuccess
            },
            stats: PlaylistStats {
                total_songs: result.total(),
                found: result.found_tracks.len(),
                missing: result.missing_tracks.len(),
            },
            playlist: result.playlist,
            found_tracks: result.found_tracks,
            missing_tracks: result.missing_tracks,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Found,
    NotFound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTrackResponse {
    pub status: SearchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackMatch>,
}

#[derive(Tabled)]
pub struct ChartTableRow {
    #[tabled(rename = "#")]
    pub position: u32,
    pub title: String,
    pub artist: String,
}

impl From<&ChartEntry> for ChartTableRow {
    fn from(entry: &ChartEntry) -> Self {
        Self {
            position: entry.position,
            title: entry.title.clone(),
            artist: entry.artist.clone(),
        }
    }
}
