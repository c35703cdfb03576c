//! Tests for fetching chart pages over HTTP against a mock chart site.

use std::time::Duration;

use chartbridge::chart::{ChartError, ChartFetcher};
use chrono::NaiveDate;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LAYOUT_PAGE: &str = include_str!("fixtures/hot100_layout.html");

fn fetcher(server: &MockServer) -> ChartFetcher {
    ChartFetcher::new(
        format!("{}/charts/hot-100/", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[test]
fn test_chart_url() {
    let fetcher = ChartFetcher::new("https://charts.test/hot-100/", Duration::from_secs(5)).unwrap();

    assert_eq!(fetcher.chart_url(None), "https://charts.test/hot-100");
    assert_eq!(
        fetcher.chart_url(NaiveDate::from_ymd_opt(2024, 1, 6)),
        "https://charts.test/hot-100/2024-01-06"
    );
}

#[tokio::test]
async fn test_fetch_current_chart() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/charts/hot-100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LAYOUT_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let entries = fetcher(&server).fetch(None).await.unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title, "Lovin On Me");
}

#[tokio::test]
async fn test_fetch_dated_chart() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/charts/hot-100/2024-01-06"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LAYOUT_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2024, 1, 6);
    let entries = fetcher(&server).fetch(date).await.unwrap();

    assert_eq!(entries[2].artist, "Doja Cat");
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/charts/hot-100"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let result = fetcher(&server).fetch(None).await;

    match result {
        Err(ChartError::Status(status)) => assert_eq!(status.as_u16(), 403),
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_page_without_entries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/charts/hot-100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>maintenance</body></html>"),
        )
        .mount(&server)
        .await;

    let result = fetcher(&server).fetch(None).await;
    assert!(matches!(result, Err(ChartError::NoEntries)));
}

#[tokio::test]
async fn test_fetch_unreachable_site() {
    let fetcher = ChartFetcher::new("http://127.0.0.1:1/charts", Duration::from_secs(2)).unwrap();

    let result = fetcher.fetch(None).await;
    assert!(matches!(result, Err(ChartError::Request(_))));
}
