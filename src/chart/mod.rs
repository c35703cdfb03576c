//! # Chart Module
//!
//! Fetches the Billboard Hot 100 page and turns it into ranked
//! [`ChartEntry`](crate::types::ChartEntry) values.
//!
//! The work is split in two halves:
//!
//! - [`fetch`] - HTTP access to the chart page (browser user agent, optional
//!   historical date segment, status checking)
//! - [`parser`] - pure HTML parsing behind a single `parse(html) -> entries`
//!   function, so layout changes on the chart site stay contained in one file
//!   and the parser can be tested against saved pages
//!
//! Fetch failures are reported through [`ChartError`]. An unreachable site, a
//! non-2xx answer and a page without recognizable entries are distinct
//! variants, although the HTTP service currently reports all of them as a
//! generic 500.

mod fetch;
pub mod parser;

pub use fetch::{ChartFetcher, USER_AGENT};

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("chart page answered with status {0}")]
    Status(StatusCode),

    #[error("no chart entries found on page")]
    NoEntries,
}
