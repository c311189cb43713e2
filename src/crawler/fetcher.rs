//! Fetch capability
//!
//! This module defines the boundary between the crawl core and page
//! retrieval, and the HTTP implementation used by the binary:
//! - Building HTTP clients with proper user agent strings
//! - GET requests and status / Content-Type classification
//! - Handing extracted listings to the record sink
//! - Submitting discovered links to the frontier

use crate::config::{Config, UserAgentConfig};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::PageExtractor;
use crate::districts::DistrictMatcher;
use crate::output::RecordSink;
use crate::url::{origin_of, resolve_against};
use crate::CrawlError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// What a single visit produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitReport {
    /// Listings handed to the record sink
    pub listings: u64,

    /// Links submitted to the frontier
    pub links_discovered: u64,

    /// Submitted links the frontier had not seen before
    pub links_accepted: u64,
}

/// The fetch capability the driver invokes for every URL
///
/// An implementation retrieves `url`, writes extracted listings to `sink`
/// and submits discovered links to `frontier`. Every write and every `add`
/// must complete before `visit` returns; the driver's quiescence detection
/// relies on it.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn visit(
        &self,
        url: &str,
        frontier: &Frontier,
        sink: &dyn RecordSink,
    ) -> Result<VisitReport, CrawlError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use listing_crawler::config::UserAgentConfig;
/// use listing_crawler::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body
///
/// Non-success statuses and non-HTML responses are errors; the caller
/// treats them as a page with nothing to extract.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, CrawlError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| CrawlError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CrawlError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    // A missing header is given the benefit of the doubt
    if !content_type.is_empty() && !content_type.contains("html") {
        return Err(CrawlError::ContentMismatch {
            url: url.to_string(),
            content_type,
        });
    }

    response.text().await.map_err(|source| CrawlError::Http {
        url: url.to_string(),
        source,
    })
}

/// HTTP implementation of the fetch capability
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
    extractor: PageExtractor,
}

impl HttpFetcher {
    /// Creates a fetcher from explicit parts
    pub fn new(client: Client, base_url: Url, extractor: PageExtractor) -> Self {
        Self {
            client,
            base_url,
            extractor,
        }
    }

    /// Creates a fetcher from the crawler configuration
    ///
    /// Relative URLs are resolved against `crawler.base-url`, or the seed's
    /// origin when that is unset.
    pub fn from_config(config: &Config) -> Result<Self, CrawlError> {
        let base_url = match &config.crawler.base_url {
            Some(base) => Url::parse(base)?,
            None => origin_of(&Url::parse(&config.crawler.seed_url)?),
        };

        let client = build_http_client(&config.user_agent, config.crawler.request_timeout())?;
        let extractor = PageExtractor::new(
            &config.selectors,
            &config.extraction,
            DistrictMatcher::from_overrides(&config.districts),
        )?;

        Ok(Self::new(client, base_url, extractor))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn visit(
        &self,
        url: &str,
        frontier: &Frontier,
        sink: &dyn RecordSink,
    ) -> Result<VisitReport, CrawlError> {
        let target = resolve_against(&self.base_url, url)?;
        let body = fetch_page(&self.client, &target).await?;

        let page = self.extractor.parse(&body, &target);
        let mut report = VisitReport::default();

        for listing in &page.listings {
            sink.write(listing)?;
            report.listings += 1;
        }

        for link in page.links() {
            report.links_discovered += 1;
            if frontier.add(link).await {
                report.links_accepted += 1;
            }
        }

        tracing::debug!(
            "Visited {}: {} listings, {} links ({} new)",
            target,
            report.listings,
            report.links_discovered,
            report.links_accepted
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer) -> HttpFetcher {
        let config = crate::config::parse_config(&format!(
            r#"
[crawler]
seed-url = "{}/list"

[output]
csv-path = "unused.csv"
"#,
            server.uri()
        ))
        .unwrap();
        HttpFetcher::from_config(&config).unwrap()
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_visit_relative_url_uses_base() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/list"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(
                    r#"<div class="pagination"><span class="after"><a href="/list2">n</a></span></div>"#,
                    "text/html; charset=utf-8",
                ),
            )
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let (frontier, mut pending) = Frontier::new(10);
        let sink = MemorySink::new();

        let report = fetcher.visit("/list", &frontier, &sink).await.unwrap();

        assert_eq!(report.listings, 0);
        assert_eq!(report.links_discovered, 1);
        assert_eq!(report.links_accepted, 1);
        assert_eq!(pending.try_next(), Some(format!("{}/list2", server.uri())));
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let (frontier, _pending) = Frontier::new(10);
        let sink = MemorySink::new();

        let result = fetcher
            .visit(&format!("{}/missing", server.uri()), &frontier, &sink)
            .await;

        assert!(matches!(
            result,
            Err(CrawlError::HttpStatus { status: 404, .. })
        ));
        assert_eq!(frontier.count(), 0);
    }

    #[tokio::test]
    async fn test_non_html_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("%PDF", "application/pdf"),
            )
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let (frontier, _pending) = Frontier::new(10);
        let sink = MemorySink::new();

        let result = fetcher
            .visit(&format!("{}/file.pdf", server.uri()), &frontier, &sink)
            .await;

        match result {
            Err(CrawlError::ContentMismatch { content_type, .. }) => {
                assert_eq!(content_type, "application/pdf")
            }
            other => panic!("expected ContentMismatch, got {:?}", other.map(|_| ())),
        }
    }
}
