//! Record sink traits and types
//!
//! This module defines the trait interface for record sinks and the
//! listing record they accept.

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Output lock poisoned: {0}")]
    Poisoned(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// One listing extracted from a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// The page the listing was extracted from
    pub url: String,

    /// Price text with the currency suffix removed
    pub price: String,

    /// District matched from the description
    pub district: String,

    /// When the listing was extracted
    pub scraped_at: DateTime<Utc>,
}

impl Listing {
    /// Column names, in the order `to_record` emits fields
    pub const HEADER: [&'static str; 4] = ["url", "price", "district", "scraped_at"];

    /// Creates a listing stamped with the current time
    pub fn new(url: impl Into<String>, price: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            price: price.into(),
            district: district.into(),
            scraped_at: Utc::now(),
        }
    }

    /// Returns the listing as an ordered set of string fields
    pub fn to_record(&self) -> [String; 4] {
        [
            self.url.clone(),
            self.price.clone(),
            self.district.clone(),
            self.scraped_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        ]
    }
}

/// Trait for record sinks
///
/// A sink is append-only: records are written in the order fetches complete.
/// Implementations must be thread-safe since fetch callbacks may run on
/// other tasks.
pub trait RecordSink: Send + Sync {
    /// Appends one listing
    fn write(&self, listing: &Listing) -> OutputResult<()>;

    /// Flushes buffered records to the underlying storage
    fn flush(&self) -> OutputResult<()>;

    /// Number of listings written so far
    fn written(&self) -> u64;
}
