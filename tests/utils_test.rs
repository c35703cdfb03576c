use chartbridge::types::{ChartEntry, ChartTableRow};
use chartbridge::utils::*;
use chrono::{NaiveDate, Utc};

fn entry(position: u32, title: &str, artist: &str) -> ChartEntry {
    ChartEntry {
        position,
        title: title.to_string(),
        artist: artist.to_string(),
    }
}

#[test]
fn test_generate_token() {
    let token = generate_token(32);

    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(token, generate_token(32));
}

#[test]
fn test_parse_chart_date_valid() {
    assert_eq!(
        parse_chart_date("2024-01-06"),
        NaiveDate::from_ymd_opt(2024, 1, 6)
    );
}

#[test]
fn test_parse_chart_date_invalid() {
    assert!(parse_chart_date("2024-13-01").is_none());
    assert!(parse_chart_date("2024-02-30").is_none());
    assert!(parse_chart_date("06/01/2024").is_none());
    assert!(parse_chart_date("").is_none());
    assert!(parse_chart_date("yesterday").is_none());
}

#[test]
fn test_format_chart_date() {
    let date = NaiveDate::from_ymd_opt(1999, 12, 4).unwrap();
    assert_eq!(format_chart_date(date), "1999-12-04");
}

#[test]
fn test_clean_search_term_removes_punctuation() {
    assert_eq!(clean_search_term("Don't Stop!"), "Dont Stop");
    assert_eq!(clean_search_term("Tyler, The Creator"), "Tyler The Creator");
    assert_eq!(clean_search_term("Beyoncé & JAY-Z"), "Beyoncé  JAYZ");
}

#[test]
fn test_clean_search_term_trims() {
    assert_eq!(clean_search_term("  (Hello)  "), "Hello");
    assert_eq!(clean_search_term("?!"), "");
}

#[test]
fn test_build_search_queries_order() {
    let queries = build_search_queries("Flowers", "Miley Cyrus");

    assert_eq!(queries[0], "track:\"Flowers\" artist:\"Miley Cyrus\"");
    assert_eq!(queries[1], "\"Flowers\" \"Miley Cyrus\"");
    assert_eq!(queries[2], "Flowers Miley Cyrus");
    assert_eq!(queries[3], "track:Flowers artist:Miley Cyrus");
}

#[test]
fn test_default_playlist_name_with_date() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 6);
    assert_eq!(default_playlist_name(date), "Billboard Hot 100 - 2024-01-06");
}

#[test]
fn test_default_playlist_name_uses_today() {
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(
        default_playlist_name(None),
        format!("Billboard Hot 100 - {today}")
    );
}

#[test]
fn test_playlist_description() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 6);

    assert_eq!(
        playlist_description(date),
        "Billboard Hot 100 chart from 2024-01-06. Created with chartbridge."
    );
    assert_eq!(
        playlist_description(None),
        "Billboard Hot 100 chart from current week. Created with chartbridge."
    );
}

#[test]
fn test_chart_label() {
    assert_eq!(chart_label(None), "current");
    assert_eq!(chart_label(NaiveDate::from_ymd_opt(2023, 7, 1)), "2023-07-01");
}

#[test]
fn test_chart_table_row_from_entry() {
    let row = ChartTableRow::from(&entry(7, "Lovin On Me", "Jack Harlow"));

    assert_eq!(row.position, 7);
    assert_eq!(row.title, "Lovin On Me");
    assert_eq!(row.artist, "Jack Harlow");
}

#[test]
fn test_chart_table_renders_entries() {
    let table = chartbridge::cli::chart_table(&[
        entry(1, "Lovin On Me", "Jack Harlow"),
        entry(2, "Cruel Summer", "Taylor Swift"),
    ]);

    assert!(table.contains("Lovin On Me"));
    assert!(table.contains("Taylor Swift"));
    assert!(table.contains('#'));
}
