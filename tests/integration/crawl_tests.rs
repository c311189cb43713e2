//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small paginated listings site and
//! run the full crawl cycle end-to-end into a temporary CSV file.

use listing_crawler::config::{parse_config, Config};
use listing_crawler::crawler::crawl;
use listing_crawler::{CrawlError, Termination};
use std::path::Path;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a short idle timeout
fn create_test_config(seed_url: &str, csv_path: &Path) -> Config {
    parse_config(&format!(
        r#"
[crawler]
seed-url = "{}"
poll-interval = 20
idle-threshold = 5
request-timeout = 5

[user-agent]
crawler-name = "TestBot"
crawler-version = "1.0.0"

[output]
csv-path = "{}"
"#,
        seed_url,
        csv_path.display()
    ))
    .expect("Failed to parse test config")
}

fn results_page(details: &[&str], next: Option<&str>) -> String {
    let mut body = String::from("<html><body>");
    for href in details {
        body.push_str(&format!(
            r#"<div class="result-link"><div class="container"><div class="title"><a href="{}">Flat</a></div></div></div>"#,
            href
        ));
    }
    if let Some(href) = next {
        body.push_str(&format!(
            r#"<div class="pagination"><span class="after"><a href="{}">Next</a></span></div>"#,
            href
        ));
    }
    body.push_str("</body></html>");
    body
}

fn detail_page(price: &str, description: &str) -> String {
    format!(
        r#"<html><body><div class="vip-header-and-details">
             <div class="vip-content-header"><span class="price"><span class="value">{}</span></span></div>
             <div class="vip-details"><div class="description"><span>{}</span></div></div>
           </div></body></html>"#,
        price, description
    )
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

fn read_rows(csv_path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(csv_path)
        .expect("Failed to open output CSV");
    reader
        .records()
        .map(|r| r.expect("Malformed CSV row").iter().map(String::from).collect())
        .collect()
}

#[tokio::test]
async fn test_full_crawl_follows_pagination_and_details() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_html(
        &server,
        "/s-flats/p1",
        results_page(&["/a-flat/1", "/a-flat/2"], Some("/s-flats/p2")),
    )
    .await;
    // Page 2 repeats listing 2, which must not be fetched twice
    mount_html(
        &server,
        "/s-flats/p2",
        results_page(&["/a-flat/2", "/a-flat/3"], None),
    )
    .await;
    mount_html(&server, "/a-flat/1", detail_page("459 000 zł", "Mieszkanie na Krzykach")).await;
    mount_html(&server, "/a-flat/2", detail_page("320 000 zł", "Nowe osiedle, Gaj")).await;
    mount_html(&server, "/a-flat/3", detail_page("1 200 zł", "Blisko centrum")).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("listings.csv");
    let config = create_test_config(&format!("{}/s-flats/p1", base), &csv_path);

    let outcome = crawl(&config, CancellationToken::new())
        .await
        .expect("Crawl failed");

    assert_eq!(outcome.termination, Termination::Quiescent);
    assert_eq!(outcome.unique_urls, 5);
    assert_eq!(outcome.pages_fetched, 5);
    assert_eq!(outcome.fetch_failures, 0);
    assert_eq!(outcome.records_written, 3);

    let rows = read_rows(&csv_path);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], vec!["url", "price", "district", "scraped_at"]);

    let summary: Vec<(String, String, String)> = rows[1..]
        .iter()
        .map(|r| (r[0].clone(), r[1].clone(), r[2].clone()))
        .collect();
    let expected: Vec<(String, String, String)> = [
        ("/a-flat/1", "459 000", "krzyki"),
        ("/a-flat/2", "320 000", "gaj"),
        ("/a-flat/3", "1 200", "-"),
    ]
    .iter()
    .map(|(p, price, district)| (format!("{}{}", base, p), price.to_string(), district.to_string()))
    .collect();
    assert_eq!(summary, expected);
    assert!(rows[1..].iter().all(|r| r[3].ends_with('Z')));

    let requests = server.received_requests().await.expect("Request recording disabled");
    let detail_two_hits = requests
        .iter()
        .filter(|r| r.url.path() == "/a-flat/2")
        .count();
    assert_eq!(detail_two_hits, 1);
}

#[tokio::test]
async fn test_link_back_to_seed_is_not_refetched() {
    let server = MockServer::start().await;

    mount_html(&server, "/list", results_page(&[], Some("/list2"))).await;
    // Page 2 links back to the seed, spelled without the fragment
    mount_html(&server, "/list2", results_page(&[], Some("/list"))).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("out.csv");
    let config = create_test_config(&format!("{}/list#results", server.uri()), &csv_path);

    let outcome = crawl(&config, CancellationToken::new())
        .await
        .expect("Crawl failed");

    assert_eq!(outcome.unique_urls, 2);
    assert_eq!(outcome.pages_fetched, 2);

    let requests = server.received_requests().await.expect("Request recording disabled");
    let seed_hits = requests.iter().filter(|r| r.url.path() == "/list").count();
    assert_eq!(seed_hits, 1);
}

#[tokio::test]
async fn test_failed_pages_do_not_stop_the_crawl() {
    let server = MockServer::start().await;

    mount_html(
        &server,
        "/list",
        results_page(&["/gone", "/ok"], None),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_html(&server, "/ok", detail_page("100 zł", "Biskupin")).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("out.csv");
    let config = create_test_config(&format!("{}/list", server.uri()), &csv_path);

    let outcome = crawl(&config, CancellationToken::new())
        .await
        .expect("Crawl failed");

    assert!(outcome.is_complete());
    assert_eq!(outcome.unique_urls, 3);
    assert_eq!(outcome.pages_fetched, 2);
    assert_eq!(outcome.fetch_failures, 1);

    let rows = read_rows(&csv_path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][2], "biskupin");
}

#[tokio::test]
async fn test_unreachable_seed_finishes_with_empty_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("out.csv");
    let config = create_test_config(&format!("{}/missing", server.uri()), &csv_path);

    let outcome = crawl(&config, CancellationToken::new())
        .await
        .expect("Crawl failed");

    assert_eq!(outcome.termination, Termination::Quiescent);
    assert_eq!(outcome.unique_urls, 1);
    assert_eq!(outcome.fetch_failures, 1);
    assert_eq!(read_rows(&csv_path).len(), 1);
}

#[tokio::test]
async fn test_unwritable_output_aborts_before_fetching() {
    let server = MockServer::start().await;
    mount_html(&server, "/list", results_page(&[], None)).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("no-such-dir").join("out.csv");
    let config = create_test_config(&format!("{}/list", server.uri()), &csv_path);

    let result = crawl(&config, CancellationToken::new()).await;

    assert!(matches!(result, Err(CrawlError::Output(_))));
    let requests = server.received_requests().await.expect("Request recording disabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_cancelled_crawl_reports_partial_results() {
    let server = MockServer::start().await;
    mount_html(&server, "/list", results_page(&[], None)).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("out.csv");
    let config = create_test_config(&format!("{}/list", server.uri()), &csv_path);

    let cancel = CancellationToken::new();
    cancel.cancel();
    let outcome = crawl(&config, cancel).await.expect("Crawl failed");

    assert_eq!(outcome.termination, Termination::Cancelled);
    assert_eq!(outcome.pages_fetched, 0);
    // The header row is still written
    assert_eq!(read_rows(&csv_path).len(), 1);
}
