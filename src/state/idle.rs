use std::time::Duration;
use tokio::time::Instant;

/// Tracks how long the driver has gone without work
///
/// Quiescence is decided by an idle timer rather than by counting sleeps: the
/// crawl is complete once `idle_threshold * poll_interval` has elapsed since
/// the last activity. The consecutive empty-poll counter is kept alongside for
/// reporting and is reset whenever a URL is dequeued.
#[derive(Debug, Clone)]
pub struct IdleTracker {
    /// How long the driver may stay idle before the crawl is declared complete
    idle_timeout: Duration,

    /// Last time work was dequeued, finished, or known to be in flight
    last_activity: Instant,

    /// Empty polls since the last dequeue
    consecutive_idle: u32,

    /// Empty polls over the whole run
    total_idle: u64,
}

impl IdleTracker {
    /// Creates a tracker whose timer starts at `now`
    pub fn new(poll_interval: Duration, idle_threshold: u32, now: Instant) -> Self {
        Self {
            idle_timeout: poll_interval.saturating_mul(idle_threshold),
            last_activity: now,
            consecutive_idle: 0,
            total_idle: 0,
        }
    }

    /// Restarts the idle timer without touching the empty-poll counter
    pub fn touch(&mut self, now: Instant) {
        self.last_activity = now;
    }

    /// Records that a URL was pulled from the pending-work channel
    pub fn record_dequeue(&mut self, now: Instant) {
        self.last_activity = now;
        self.consecutive_idle = 0;
    }

    /// Records one poll that found no pending work
    pub fn record_idle(&mut self) {
        self.consecutive_idle += 1;
        self.total_idle += 1;
    }

    /// Returns true once the idle timeout has elapsed since the last activity
    pub fn is_quiescent(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_activity) >= self.idle_timeout
    }

    /// Time left before the tracker reports quiescence
    ///
    /// Returns None if the timeout has already elapsed.
    pub fn time_until_quiescent(&self, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.last_activity);
        self.idle_timeout
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    pub fn consecutive_idle(&self) -> u32 {
        self.consecutive_idle
    }

    pub fn total_idle(&self) -> u64 {
        self.total_idle
    }
}
