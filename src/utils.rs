use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("NON_WORD is a valid regex literal"));

/// Random alphanumeric token, used for session ids, OAuth `state` values and
/// fallback secrets.
pub fn generate_token(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Parses a `YYYY-MM-DD` chart date.
pub fn parse_chart_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

pub fn format_chart_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Strips everything but word characters and whitespace.
pub fn clean_search_term(term: &str) -> String {
    NON_WORD.replace_all(term, "").trim().to_string()
}

/// Search queries for a title/artist pair, from strictest to loosest.
///
/// Terms are expected to be cleaned with [`clean_search_term`] already.
pub fn build_search_queries(title: &str, artist: &str) -> [String; 4] {
    [
        format!("track:\"{title}\" artist:\"{artist}\""),
        format!("\"{title}\" \"{artist}\""),
        format!("{title} {artist}"),
        format!("track:{title} artist:{artist}"),
    ]
}

/// Playlist name used when the caller did not pick one.
pub fn default_playlist_name(date: Option<NaiveDate>) -> String {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    format!("Billboard Hot 100 - {}", format_chart_date(date))
}

pub fn playlist_description(date: Option<NaiveDate>) -> String {
    let week = date
        .map(format_chart_date)
        .unwrap_or_else(|| "current week".to_string());
    format!("Billboard Hot 100 chart from {week}. Created with chartbridge.")
}

/// Label for a chart in listings: the date, or `current`.
pub fn chart_label(date: Option<NaiveDate>) -> String {
    date.map(format_chart_date)
        .unwrap_or_else(|| "current".to_string())
}
