//! Crawl outcome reporting
//!
//! The driver returns a structured `CrawlOutcome` instead of only logging a
//! final count, so callers can tell a drained crawl from an interrupted one.

use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// Why the driver stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// No new work showed up within the idle timeout
    Quiescent,

    /// The cancellation token fired; results are partial
    Cancelled,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quiescent => "quiescent",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one crawl run
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Distinct URLs seen by the frontier, seed included
    pub unique_urls: usize,

    /// Visits that completed without error
    pub pages_fetched: u64,

    /// Visits that failed (network, status, parse or sink errors)
    pub fetch_failures: u64,

    /// Listings handed to the record sink
    pub records_written: u64,

    /// Links submitted to the frontier, duplicates included
    pub links_discovered: u64,

    /// Empty polls over the whole run
    pub idle_cycles: u64,

    /// Why the run ended
    pub termination: Termination,

    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,

    /// Run duration
    pub elapsed: Duration,
}

impl CrawlOutcome {
    /// Returns true if the crawl drained rather than being interrupted
    pub fn is_complete(&self) -> bool {
        self.termination == Termination::Quiescent
    }

    /// Number of visits attempted, successful or not
    pub fn pages_attempted(&self) -> u64 {
        self.pages_fetched + self.fetch_failures
    }

    /// Fetch success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.pages_attempted();
        if attempted == 0 {
            return 0.0;
        }
        (self.pages_fetched as f64 / attempted as f64) * 100.0
    }
}

/// Prints the outcome to stdout in a formatted manner
pub fn print_outcome(outcome: &CrawlOutcome) {
    println!("=== Crawl Summary ===\n");

    println!("Run:");
    println!("  Started: {}", outcome.started_at.to_rfc3339());
    println!("  Duration: {:.1}s", outcome.elapsed.as_secs_f64());
    println!("  Termination: {}", outcome.termination);
    println!();

    println!("Frontier:");
    println!("  Unique URLs: {}", outcome.unique_urls);
    println!("  Links discovered: {}", outcome.links_discovered);
    println!("  Idle polls: {}", outcome.idle_cycles);
    println!();

    println!("Pages:");
    println!("  Fetched: {}", outcome.pages_fetched);
    println!("  Failed: {}", outcome.fetch_failures);
    println!("  Records written: {}", outcome.records_written);
    println!();

    println!(
        "Success Rate: {:.1}% ({} / {} pages fetched)",
        outcome.success_rate(),
        outcome.pages_fetched,
        outcome.pages_attempted()
    );

    if !outcome.is_complete() {
        println!("\nCrawl was interrupted; the output holds partial results.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(fetched: u64, failed: u64, termination: Termination) -> CrawlOutcome {
        CrawlOutcome {
            unique_urls: (fetched + failed) as usize,
            pages_fetched: fetched,
            fetch_failures: failed,
            records_written: fetched,
            links_discovered: 0,
            idle_cycles: 0,
            termination,
            started_at: Utc::now(),
            elapsed: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_success_rate() {
        let rate = outcome(80, 20, Termination::Quiescent).success_rate();
        assert!((rate - 80.0).abs() < 0.01);
    }

    #[test]
    fn test_success_rate_zero_pages() {
        assert_eq!(outcome(0, 0, Termination::Quiescent).success_rate(), 0.0);
    }

    #[test]
    fn test_is_complete() {
        assert!(outcome(1, 0, Termination::Quiescent).is_complete());
        assert!(!outcome(1, 0, Termination::Cancelled).is_complete());
    }

    #[test]
    fn test_termination_display() {
        assert_eq!(Termination::Quiescent.to_string(), "quiescent");
        assert_eq!(Termination::Cancelled.to_string(), "cancelled");
    }
}
