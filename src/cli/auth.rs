use std::time::{Duration, Instant};

use tokio::time::sleep;

use super::BridgeClient;
use crate::{error, info, success, types::StatusResponse, warning};

const MAX_WAIT: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_secs(1);
const NOTICE_EVERY: u32 = 10;

/// Makes sure the client's service session is logged in to Spotify.
///
/// Opens the consent screen in the default browser and polls the service
/// status once per second for up to 60 seconds. Returns `false` on timeout or
/// when the login could not be started.
pub async fn authenticate(client: &BridgeClient) -> bool {
    info!("Starting Spotify authentication...");

    if let Ok(status) = client.status().await {
        if status.authenticated {
            success!("Already authenticated as {}", display_name(&status));
            return true;
        }
    }

    let auth_url = match client.login_url().await {
        Ok(url) => url,
        Err(e) => {
            error!("Cannot start authentication: {}", e);
            return false;
        }
    };

    info!("Opening browser for Spotify authentication...");
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    info!("Waiting for authentication... (check your browser)");
    match wait_for_login(client).await {
        Some(status) => {
            success!("Successfully authenticated as {}", display_name(&status));
            true
        }
        None => {
            error!("Authentication timeout. Please try again.");
            false
        }
    }
}

async fn wait_for_login(client: &BridgeClient) -> Option<StatusResponse> {
    let start = Instant::now();
    let mut polls = 0;

    while start.elapsed() < MAX_WAIT {
        sleep(POLL_INTERVAL).await;
        polls += 1;

        if let Ok(status) = client.status().await {
            if status.authenticated {
                return Some(status);
            }
        }

        if polls % NOTICE_EVERY == 0 {
            let remaining = MAX_WAIT.saturating_sub(start.elapsed()).as_secs();
            info!("Still waiting... ({}s remaining)", remaining);
        }
    }

    None
}

fn display_name(status: &StatusResponse) -> String {
    status
        .user
        .as_ref()
        .and_then(|u| u.display_name.clone())
        .unwrap_or_else(|| "User".to_string())
}
