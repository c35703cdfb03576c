use tabled::Table;

use super::{BridgeClient, prompt};
use crate::{
    error, info,
    types::{ChartEntry, ChartTableRow},
};

/// Rows shown before asking whether to print the rest.
pub const PREVIEW_ROWS: usize = 20;

pub fn chart_table(entries: &[ChartEntry]) -> String {
    Table::new(entries.iter().map(ChartTableRow::from)).to_string()
}

/// Prints a chart. In interactive mode only the top entries are shown until
/// the user asks for the rest.
pub async fn show_chart(client: &BridgeClient, date: Option<&str>, interactive: bool) {
    let chart = match client.chart(date).await {
        Ok(chart) => chart,
        Err(e) => {
            error!("Error fetching chart: {}", e);
            return;
        }
    };

    info!("Billboard Hot 100 - {}", chart.date);
    info!("Total songs: {}", chart.total_songs);

    if !interactive || chart.songs.len() <= PREVIEW_ROWS {
        println!("{}", chart_table(&chart.songs));
        return;
    }

    let (top, rest) = chart.songs.split_at(PREVIEW_ROWS);
    println!("\nTop {}:\n{}", PREVIEW_ROWS, chart_table(top));

    if prompt::confirm("\nShow all songs?") {
        println!("{}", chart_table(rest));
    }
}
