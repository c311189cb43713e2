//! Crawl driver - sequences fetches and detects quiescence
//!
//! The driver fetches the seed directly, then repeatedly polls the frontier's
//! pending-work channel without blocking. Each URL taken off the channel is
//! handed to the fetch capability; an empty poll sleeps for the poll interval.
//! The crawl is declared complete once no work has shown up for
//! `idle_threshold * poll_interval`.
//!
//! Quiescence is a heuristic, not a proof: it assumes every discovery made by
//! a fetch is published before the idle timeout runs out. A fetch capability
//! that keeps publishing links after `visit` returns (from a detached task,
//! say) can race the timer and end the crawl early. Discoveries still waiting
//! for channel space are tracked by the frontier and keep the timer open.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::frontier::{Frontier, PendingReceiver};
use crate::output::{CrawlOutcome, RecordSink, Termination};
use crate::state::{DriverState, IdleTracker};
use crate::url::normalize_url;
use crate::CrawlError;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// How often an in-flight visit is checked for a stalled frontier send
const STALL_CHECK_INTERVAL: Duration = Duration::from_millis(50);

/// Progress is logged every this many visits
const PROGRESS_EVERY: u64 = 10;

/// Timing knobs for the driver loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverSettings {
    /// Sleep between empty polls
    pub poll_interval: Duration,

    /// Consecutive empty polls tolerated before the crawl is declared complete
    pub idle_threshold: u32,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            idle_threshold: 4,
        }
    }
}

impl From<&CrawlerConfig> for DriverSettings {
    fn from(config: &CrawlerConfig) -> Self {
        Self {
            poll_interval: config.poll_interval(),
            idle_threshold: config.idle_threshold,
        }
    }
}

#[derive(Debug, Default)]
struct RunCounters {
    pages_fetched: u64,
    fetch_failures: u64,
    links_discovered: u64,
}

/// Main crawl driver
pub struct Driver<F> {
    settings: DriverSettings,
    frontier: Frontier,
    pending: PendingReceiver,
    /// URLs pulled off the channel to unblock a stalled visit; older than anything still queued
    backlog: VecDeque<String>,
    fetcher: F,
    sink: Arc<dyn RecordSink>,
    state: DriverState,
    counters: RunCounters,
}

impl<F: PageFetcher> Driver<F> {
    /// Creates a driver over a frontier and its pending-work receiver
    pub fn new(
        settings: DriverSettings,
        frontier: Frontier,
        pending: PendingReceiver,
        fetcher: F,
        sink: Arc<dyn RecordSink>,
    ) -> Self {
        Self {
            settings,
            frontier,
            pending,
            backlog: VecDeque::new(),
            fetcher,
            sink,
            state: DriverState::Seeding,
            counters: RunCounters::default(),
        }
    }

    /// Runs the crawl to completion
    ///
    /// Fetches `seed_url` directly, drains the frontier until it stays empty
    /// for the idle timeout, then flushes the sink and reports the outcome.
    /// `cancel` is observed between iterations and while sleeping; a visit
    /// already in progress is allowed to finish.
    ///
    /// Fetch failures are logged and counted; they never end the run. The
    /// only error returned is a failure to flush the sink at the end.
    pub async fn run(
        mut self,
        seed_url: &str,
        cancel: CancellationToken,
    ) -> Result<CrawlOutcome, CrawlError> {
        let started_at = Utc::now();
        let start = Instant::now();
        tracing::info!("Starting crawl from {}", seed_url);

        let (termination, idle_cycles) = if cancel.is_cancelled() {
            tracing::info!("Crawl cancelled before seeding");
            (Termination::Cancelled, 0)
        } else {
            let seed = seed_key(seed_url);
            self.frontier.mark_seen(&seed);
            self.visit(&seed).await;
            self.poll_until_idle(&cancel, start).await?
        };

        self.state.transition(DriverState::Stopped)?;
        self.pending.close();

        if let Err(e) = self.sink.flush() {
            tracing::error!("Failed to flush record sink: {}", e);
            return Err(e.into());
        }

        let outcome = CrawlOutcome {
            unique_urls: self.frontier.count(),
            pages_fetched: self.counters.pages_fetched,
            fetch_failures: self.counters.fetch_failures,
            records_written: self.sink.written(),
            links_discovered: self.counters.links_discovered,
            idle_cycles,
            termination,
            started_at,
            elapsed: start.elapsed(),
        };

        tracing::info!(
            "Crawl {}: number of urls {} ({} fetched, {} failed, {} records) in {:?}",
            outcome.termination,
            outcome.unique_urls,
            outcome.pages_fetched,
            outcome.fetch_failures,
            outcome.records_written,
            outcome.elapsed
        );

        Ok(outcome)
    }

    /// The POLLING <-> FETCHING loop
    ///
    /// Returns how the loop ended and the total number of empty polls.
    async fn poll_until_idle(
        &mut self,
        cancel: &CancellationToken,
        start: Instant,
    ) -> Result<(Termination, u64), CrawlError> {
        self.state.transition(DriverState::Polling)?;

        let poll_interval = self.settings.poll_interval;
        let mut idle = IdleTracker::new(poll_interval, self.settings.idle_threshold, Instant::now());

        loop {
            if cancel.is_cancelled() {
                tracing::info!("Crawl cancelled");
                return Ok((Termination::Cancelled, idle.total_idle()));
            }

            if let Some(url) = self.next_pending() {
                idle.record_dequeue(Instant::now());

                self.state.transition(DriverState::Fetching)?;
                self.visit(&url).await;
                self.state.transition(DriverState::Polling)?;

                idle.touch(Instant::now());
                self.log_progress(start);
                continue;
            }

            let now = Instant::now();
            if self.frontier.pending_sends() > 0 {
                idle.touch(now);
            }

            idle.record_idle();
            if idle.is_quiescent(now) {
                self.state.transition(DriverState::Drained)?;
                tracing::info!(
                    "No new work for {:?} ({} empty polls), done waiting",
                    idle.idle_timeout(),
                    idle.consecutive_idle()
                );
                return Ok((Termination::Quiescent, idle.total_idle()));
            }

            let nap = idle
                .time_until_quiescent(now)
                .map_or(poll_interval, |remaining| remaining.min(poll_interval));
            tracing::trace!(
                "Idle poll {} (sleeping {:?})",
                idle.consecutive_idle(),
                nap
            );

            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(nap) => {}
            }
        }
    }

    /// Non-blocking take: backlog first, then the channel
    fn next_pending(&mut self) -> Option<String> {
        self.backlog
            .pop_front()
            .or_else(|| self.pending.try_next())
    }

    /// Visits one URL, absorbing failures
    ///
    /// The driver is the only consumer of the pending-work channel, so a visit
    /// whose discoveries overflow the channel would wait on itself forever.
    /// While a send is stalled the channel is drained into the backlog.
    async fn visit(&mut self, url: &str) {
        tracing::debug!("Visiting {}", url);

        let result = {
            let visit = self.fetcher.visit(url, &self.frontier, self.sink.as_ref());
            tokio::pin!(visit);

            let mut stall_check = tokio::time::interval(STALL_CHECK_INTERVAL);
            stall_check.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    result = &mut visit => break result,
                    _ = stall_check.tick() => {
                        if self.frontier.pending_sends() > 0 {
                            while let Some(pending) = self.pending.try_next() {
                                self.backlog.push_back(pending);
                            }
                        }
                    }
                }
            }
        };

        match result {
            Ok(report) => {
                self.counters.pages_fetched += 1;
                self.counters.links_discovered += report.links_discovered;
            }
            Err(e) => {
                self.counters.fetch_failures += 1;
                tracing::warn!("Failed to fetch {}: {}", url, e);
            }
        }
    }

    fn log_progress(&self, start: Instant) {
        let visits = self.counters.pages_fetched + self.counters.fetch_failures;
        if visits == 0 || visits % PROGRESS_EVERY != 0 {
            return;
        }

        let elapsed = start.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            visits as f64 / elapsed
        } else {
            0.0
        };
        tracing::info!(
            "{}",
            progress_message(visits, self.frontier.count(), self.backlog.len(), rate)
        );
    }
}

/// `backlog` counts only URLs set aside during a stalled visit, not the channel
fn progress_message(visits: u64, seen: usize, backlog: usize, rate: f64) -> String {
    format!(
        "Progress: {} pages visited, {} URLs seen, {} in backlog, {:.2} pages/sec",
        visits, seen, backlog, rate
    )
}

/// Spells the seed the way discovered links are spelled
///
/// Links reach the frontier normalized, so an unnormalized seed would be
/// fetched again when a page links back to it. Seeds that are not absolute
/// http(s) URLs are left as given for fetchers with their own addressing.
fn seed_key(seed_url: &str) -> String {
    match normalize_url(seed_url.trim()) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::debug!("Using seed '{}' as given: {}", seed_url, e);
            seed_url.trim().to_string()
        }
    }
}
