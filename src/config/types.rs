use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Main configuration structure for the listing crawler
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// Phrase -> district overrides; empty means the built-in table
    #[serde(default)]
    pub districts: HashMap<String, String>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// The single starting URL of the crawl
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Base URL that relative links are resolved against (defaults to the seed origin)
    #[serde(rename = "base-url", default)]
    pub base_url: Option<String>,

    /// Capacity of the pending-work channel
    #[serde(rename = "queue-capacity", default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Sleep between empty polls (milliseconds)
    #[serde(rename = "poll-interval", default = "default_poll_interval")]
    pub poll_interval: u64,

    /// Number of consecutive empty polls before the crawl is declared complete
    #[serde(rename = "idle-threshold", default = "default_idle_threshold")]
    pub idle_threshold: u32,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_queue_capacity() -> usize {
    1000
}

fn default_poll_interval() -> u64 {
    1000
}

fn default_idle_threshold() -> u32 {
    4
}

fn default_request_timeout() -> u64 {
    30
}

impl CrawlerConfig {
    /// Creates a crawler config for `seed_url` with every other field defaulted
    pub fn with_seed(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            base_url: None,
            queue_capacity: default_queue_capacity(),
            poll_interval: default_poll_interval(),
            idle_threshold: default_idle_threshold(),
            request_timeout: default_request_timeout(),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval)
    }

    /// How long the driver waits without new work before finishing
    pub fn idle_timeout(&self) -> Duration {
        self.poll_interval().saturating_mul(self.idle_threshold)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value: `Name/Version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV file records are appended to
    #[serde(rename = "csv-path")]
    pub csv_path: String,

    /// Whether to write a header row when the file is created
    #[serde(rename = "write-header", default = "default_write_header")]
    pub write_header: bool,
}

fn default_write_header() -> bool {
    true
}

/// CSS selectors used to pull fields and links out of fetched pages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Block holding a single listing's details
    pub listing: String,

    /// Price text, relative to the listing block
    pub price: String,

    /// Description text, relative to the listing block
    pub description: String,

    /// Containers whose first `<a>` points at a listing detail page
    #[serde(rename = "detail-link")]
    pub detail_link: String,

    /// Containers whose first `<a>` points at the next results page
    #[serde(rename = "next-page")]
    pub next_page: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            listing: ".vip-header-and-details".to_string(),
            price: ".vip-content-header .price .value".to_string(),
            description: ".vip-details .description span".to_string(),
            detail_link: ".result-link .container .title".to_string(),
            next_page: ".pagination .after".to_string(),
        }
    }
}

impl SelectorConfig {
    /// Returns every selector paired with its config key
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("listing", self.listing.as_str()),
            ("price", self.price.as_str()),
            ("description", self.description.as_str()),
            ("detail-link", self.detail_link.as_str()),
            ("next-page", self.next_page.as_str()),
        ]
    }
}

/// Field extraction settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Currency suffix stripped from the price text
    #[serde(rename = "currency-suffix")]
    pub currency_suffix: String,

    /// Value written when no district matches the description
    #[serde(rename = "unknown-district")]
    pub unknown_district: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            currency_suffix: "zł".to_string(),
            unknown_district: "-".to_string(),
        }
    }
}
