use super::{BridgeClient, authenticate, create_playlist, prompt, show_chart};
use crate::{error, fatal, info, utils};

const DATE_ERROR: &str = "Invalid date format. Please use YYYY-MM-DD";

/// Menu-driven client session.
pub async fn interactive(client: &BridgeClient) {
    println!("Chart Bridge CLI");
    println!("{}", "=".repeat(40));

    if !client.is_reachable().await {
        fatal!(
            "Bridge service not running at {}. Please start it first with: chartbridge-server",
            client.base_url()
        );
    }

    if !authenticate(client).await {
        return;
    }

    loop {
        println!("\n{}", "=".repeat(40));
        println!("Options:");
        println!("1. Create playlist from current Billboard Hot 100");
        println!("2. Create playlist from specific date");
        println!("3. View Billboard chart");
        println!("4. Exit");

        let Some(choice) = prompt::ask("\nEnter your choice (1-4): ") else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let name = prompt::optional("Playlist name (optional): ");
                let public = prompt::confirm("Make playlist public?");
                create_playlist(client, None, name, public).await;
            }
            "2" => {
                let date = prompt::ask("Enter date (YYYY-MM-DD): ").unwrap_or_default();
                if utils::parse_chart_date(&date).is_none() {
                    error!("{}", DATE_ERROR);
                    continue;
                }
                let name = prompt::optional("Playlist name (optional): ");
                let public = prompt::confirm("Make playlist public?");
                create_playlist(client, Some(date), name, public).await;
            }
            "3" => {
                let date = prompt::optional("Enter date (YYYY-MM-DD) or press Enter for current: ");
                if let Some(date) = &date {
                    if utils::parse_chart_date(date).is_none() {
                        error!("{}", DATE_ERROR);
                        continue;
                    }
                }
                show_chart(client, date.as_deref(), true).await;
            }
            "4" => {
                info!("Goodbye!");
                break;
            }
            _ => error!("Invalid choice. Please enter 1-4."),
        }
    }
}
