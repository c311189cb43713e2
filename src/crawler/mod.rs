//! Crawler module for page fetching and crawl sequencing
//!
//! This module contains the core crawling logic, including:
//! - The deduplicating URL frontier and its pending-work channel
//! - The driver loop and its idle-based termination
//! - HTTP fetching behind the `PageFetcher` capability
//! - HTML parsing and link extraction

mod driver;
mod fetcher;
mod frontier;
mod parser;

pub use driver::{Driver, DriverSettings};
pub use fetcher::{build_http_client, fetch_page, HttpFetcher, PageFetcher, VisitReport};
pub use frontier::{Frontier, PendingReceiver};
pub use parser::{PageExtractor, ParsedPage};

use crate::config::Config;
use crate::output::{CrawlOutcome, CsvSink};
use crate::CrawlError;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Open the CSV output file
/// 2. Build the HTTP fetcher and page extractor
/// 3. Create the frontier
/// 4. Drive the crawl from the configured seed until it goes quiet or `cancel` fires
///
/// A sink that cannot be opened aborts the run before any page is fetched.
pub async fn crawl(config: &Config, cancel: CancellationToken) -> Result<CrawlOutcome, CrawlError> {
    let sink = CsvSink::create(Path::new(&config.output.csv_path), config.output.write_header)?;
    tracing::info!("Writing records to {}", config.output.csv_path);

    let fetcher = HttpFetcher::from_config(config)?;
    let (frontier, pending) = Frontier::new(config.crawler.queue_capacity);

    let driver = Driver::new(
        DriverSettings::from(&config.crawler),
        frontier,
        pending,
        fetcher,
        Arc::new(sink),
    );

    driver.run(&config.crawler.seed_url, cancel).await
}
