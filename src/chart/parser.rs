//! HTML parsing for chart pages.
//!
//! The chart site has changed its markup several times. Title elements are
//! located with an ordered list of selectors, one per known layout, and the
//! first selector that matches anything wins. When none match, the parser
//! falls back to scanning headings, preferring partial data over none.

use scraper::{ElementRef, Html, Selector};

use crate::types::ChartEntry;

pub const MAX_ENTRIES: usize = 100;
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

const LAYOUT_SELECTORS: [&str; 4] = [
    "li ul li h3",
    "h3.c-title",
    ".chart-list__item h3",
    ".o-chart-results-list__item h3",
];

const FALLBACK_SELECTORS: [&str; 2] = ["h3", "h1, h2, h3, h4, h5, h6"];

const ARTIST_CANDIDATES: &str = "p, span, div";
const MAX_ARTIST_LEN: usize = 100;

/// Parses a chart page into ranked entries.
pub fn parse(html: &str) -> Vec<ChartEntry> {
    let document = Html::parse_document(html);
    parse_document(&document)
}

/// Parses an already loaded document.
///
/// Positions follow the order of the matched elements. Elements whose text is
/// shorter than two characters are skipped without renumbering the rest, so
/// positions stay unique and match the page.
pub fn parse_document(document: &Html) -> Vec<ChartEntry> {
    let Ok(artist_selector) = Selector::parse(ARTIST_CANDIDATES) else {
        return Vec::new();
    };

    select_title_elements(document)
        .into_iter()
        .take(MAX_ENTRIES)
        .enumerate()
        .filter_map(|(index, element)| {
            let title = element_text(&element);
            if title.chars().count() < 2 {
                return None;
            }

            let artist = find_artist(&element, &title, &artist_selector)
                .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

            Some(ChartEntry {
                position: index as u32 + 1,
                title,
                artist,
            })
        })
        .collect()
}

fn select_title_elements(document: &Html) -> Vec<ElementRef<'_>> {
    for pattern in LAYOUT_SELECTORS {
        let elements = select_all(document, pattern);
        if !elements.is_empty() {
            tracing::debug!(selector = pattern, count = elements.len(), "chart layout matched");
            return elements;
        }
    }

    for pattern in FALLBACK_SELECTORS {
        let elements = select_all(document, pattern);
        if !elements.is_empty() {
            tracing::warn!(
                selector = pattern,
                count = elements.len(),
                "no known chart layout matched, falling back to headings"
            );
            return elements;
        }
    }

    Vec::new()
}

fn select_all<'a>(document: &'a Html, pattern: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(pattern) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Text content with whitespace runs collapsed. Text nodes are joined as
/// they are, so inline markup inside a word (`Don<i>'</i>t`) stays one word.
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// The artist usually sits in a sibling of the title element. Take the first
// short, non-empty text below the parent that is not the title itself.
fn find_artist(element: &ElementRef, title: &str, candidates: &Selector) -> Option<String> {
    let parent = element.parent().and_then(ElementRef::wrap)?;

    parent
        .select(candidates)
        .map(|candidate| element_text(&candidate))
        .find(|text| !text.is_empty() && text != title && text.chars().count() < MAX_ARTIST_LEN)
}
