use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::BridgeClient;
use crate::{
    error, info, success,
    types::{BuildPlaylistRequest, PlaylistReport, PlaylistStatus},
    warning,
};

/// Missing tracks listed before summarizing the rest.
const MISSING_PREVIEW: usize = 10;

/// Asks the service to build a playlist and prints the outcome.
pub async fn create_playlist(
    client: &BridgeClient,
    date: Option<String>,
    playlist_name: Option<String>,
    public: bool,
) -> bool {
    info!(
        "Creating playlist for {} Billboard Hot 100...",
        date.as_deref().unwrap_or("current")
    );

    let pb = ProgressBar::new_spinner();
    pb.set_message("Matching chart entries on Spotify...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let request = BuildPlaylistRequest {
        date,
        playlist_name,
        public: Some(public),
    };
    let result = client.create_playlist(&request).await;
    pb.finish_and_clear();

    match result {
        Ok(report) => {
            print_report(&report);
            true
        }
        Err(e) => {
            error!("Error creating playlist: {}", e);
            false
        }
    }
}

fn print_report(report: &PlaylistReport) {
    match report.status {
        PlaylistStatus::Success => {
            success!("Successfully created playlist: {}", report.playlist.name)
        }
        PlaylistStatus::PartialSuccess => warning!(
            "Created playlist {}, but not all tracks could be added",
            report.playlist.name
        ),
    }

    info!("Playlist URL: {}", report.playlist.url);
    info!(
        "Stats: {}/{} tracks found",
        report.stats.found, report.stats.total_songs
    );

    if report.missing_tracks.is_empty() {
        return;
    }

    println!("\nMissing tracks ({}):", report.missing_tracks.len());
    for track in report.missing_tracks.iter().take(MISSING_PREVIEW) {
        println!("   • {} - {}", track.title, track.artist);
    }
    if report.missing_tracks.len() > MISSING_PREVIEW {
        println!(
            "   ... and {} more",
            report.missing_tracks.len() - MISSING_PREVIEW
        );
    }
}
