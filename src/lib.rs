//! Listing Crawler: a paginated listings scraper
//!
//! This crate crawls a paginated listings website. It follows "next page" and
//! "detail page" links, extracts one record per listing detail page and writes
//! the records to a flat CSV file. The crawl is driven by a deduplicating URL
//! frontier and a driver that stops once no new work shows up.

pub mod config;
pub mod crawler;
pub mod districts;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Expected HTML from {url}, got '{content_type}'")]
    ContentMismatch { url: String, content_type: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Invalid driver state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::DriverState,
        to: state::DriverState,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector in config: {0}")]
    InvalidSelector(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Driver, DriverSettings, Frontier, HttpFetcher, PageFetcher, VisitReport};
pub use districts::DistrictMatcher;
pub use output::{CrawlOutcome, CsvSink, Listing, MemorySink, RecordSink, Termination};
pub use state::DriverState;
