use chartbridge::chart::parser::{MAX_ENTRIES, UNKNOWN_ARTIST, parse};
use chartbridge::types::ChartEntry;

const LAYOUT_PAGE: &str = include_str!("fixtures/hot100_layout.html");
const C_TITLE_PAGE: &str = include_str!("fixtures/hot100_c_title.html");
const HEADINGS_PAGE: &str = include_str!("fixtures/hot100_headings.html");

fn entry(position: u32, title: &str, artist: &str) -> ChartEntry {
    ChartEntry {
        position,
        title: title.to_string(),
        artist: artist.to_string(),
    }
}

fn large_chart(count: usize) -> String {
    let rows: String = (1..=count)
        .map(|i| format!("<li><ul><li><h3>Song {i}</h3><span>Artist {i}</span></li></ul></li>"))
        .collect();
    format!("<html><body><ul>{rows}</ul></body></html>")
}

#[test]
fn test_parse_current_layout() {
    let entries = parse(LAYOUT_PAGE);

    assert_eq!(entries[0], entry(1, "Lovin On Me", "Jack Harlow"));
    assert_eq!(entries[1], entry(3, "Cruel Summer", "Taylor Swift"));
    assert_eq!(entries[2], entry(4, "Paint The Town Red", "Doja Cat"));
}

#[test]
fn test_parse_skips_short_titles_without_renumbering() {
    let entries = parse(LAYOUT_PAGE);

    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.title != "I"));

    let positions: Vec<u32> = entries.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![1, 3, 4]);
}

#[test]
fn test_parse_c_title_layout() {
    let entries = parse(C_TITLE_PAGE);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], entry(1, "Last Night", "Morgan Wallen"));
}

#[test]
fn test_parse_missing_artist_is_unknown() {
    let entries = parse(C_TITLE_PAGE);
    assert_eq!(entries[1], entry(2, "Solo Song", UNKNOWN_ARTIST));
}

#[test]
fn test_parse_artist_differs_from_title() {
    let entries = parse(C_TITLE_PAGE);
    assert_eq!(entries[2], entry(3, "Fast Car", "Luke Combs"));
}

#[test]
fn test_parse_falls_back_to_any_heading() {
    let entries = parse(HEADINGS_PAGE);

    assert_eq!(
        entries,
        vec![entry(1, "Greedy", "Tate McRae"), entry(2, "Snooze", "SZA")]
    );
}

#[test]
fn test_parse_caps_at_one_hundred_entries() {
    let entries = parse(&large_chart(120));

    assert_eq!(entries.len(), MAX_ENTRIES);
    assert_eq!(entries[0], entry(1, "Song 1", "Artist 1"));
    assert_eq!(entries[99], entry(100, "Song 100", "Artist 100"));
}

#[test]
fn test_parse_positions_are_unique_and_ascending() {
    let entries = parse(&large_chart(40));

    assert!(entries.windows(2).all(|w| w[0].position < w[1].position));
    assert!(entries.iter().all(|e| (1..=100).contains(&e.position)));
}

#[test]
fn test_parse_empty_document() {
    assert!(parse("").is_empty());
    assert!(parse("<html><body><p>No chart today</p></body></html>").is_empty());
}

#[test]
fn test_parse_collapses_whitespace() {
    let entries = parse(LAYOUT_PAGE);
    assert_eq!(entries[1].title, "Cruel Summer");
}

#[test]
fn test_parse_keeps_inline_markup_within_words() {
    let html = r#"<html><body><div class="chart">
        <div><h3 class="c-title">Don<i>'</i>t   Stop <b>Believin</b></h3><span>Journey</span></div>
    </div></body></html>"#;

    let entries = parse(html);

    assert_eq!(entries, vec![entry(1, "Don't Stop Believin", "Journey")]);
}
