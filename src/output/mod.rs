//! Output module for crawl records and reports
//!
//! This module handles:
//! - The record sink interface extracted listings are written to
//! - CSV and in-memory sink implementations
//! - The structured crawl outcome and its printed summary

mod csv_sink;
mod memory;
mod report;
mod traits;

pub use csv_sink::CsvSink;
pub use memory::MemorySink;
pub use report::{print_outcome, CrawlOutcome, Termination};
pub use traits::{Listing, OutputError, OutputResult, RecordSink};
