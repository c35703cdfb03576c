use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;

use super::{ChartError, parser};
use crate::{types::ChartEntry, utils};

/// Desktop browser user agent; the chart site tends to block obvious bots.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP client for the chart page.
#[derive(Debug, Clone)]
pub struct ChartFetcher {
    client: Client,
    base_url: String,
}

impl ChartFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ChartError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// URL of the chart for `date`, or of the current chart.
    pub fn chart_url(&self, date: Option<NaiveDate>) -> String {
        match date {
            Some(date) => format!("{}/{}", self.base_url, utils::format_chart_date(date)),
            None => self.base_url.clone(),
        }
    }

    /// Fetches and parses the chart.
    ///
    /// Returns at most 100 entries ordered by rank. A page that parses to
    /// nothing is reported as [`ChartError::NoEntries`].
    pub async fn fetch(&self, date: Option<NaiveDate>) -> Result<Vec<ChartEntry>, ChartError> {
        let url = self.chart_url(date);
        tracing::info!(%url, "fetching chart");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "chart page request failed");
            return Err(ChartError::Status(status));
        }

        let body = response.text().await?;
        let entries = parser::parse(&body);
        if entries.is_empty() {
            tracing::warn!(%url, "chart page contained no recognizable entries");
            return Err(ChartError::NoEntries);
        }

        tracing::info!(count = entries.len(), "chart parsed");
        Ok(entries)
    }
}
