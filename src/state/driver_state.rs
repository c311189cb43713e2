/// Driver state definitions for tracking crawl progress
///
/// The driver moves through `Seeding -> Polling <-> Fetching -> Drained -> Stopped`.
/// Cancellation may move it to `Stopped` from any non-terminal state.
use crate::CrawlError;
use std::fmt;

/// Represents the current phase of the crawl driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverState {
    /// Fetching the seed URL directly, bypassing the queue
    Seeding,

    /// Waiting for work on the pending-work channel
    Polling,

    /// A dequeued URL is being fetched
    Fetching,

    /// The idle bound was crossed while polling
    Drained,

    /// The run is over
    Stopped,
}

impl DriverState {
    /// Returns true if the driver will not do any more work
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Returns true if moving from `self` to `next` is allowed
    pub fn can_transition_to(&self, next: DriverState) -> bool {
        use DriverState::*;
        matches!(
            (self, next),
            (Seeding, Polling)
                | (Polling, Fetching)
                | (Fetching, Polling)
                | (Polling, Drained)
                | (Drained, Stopped)
                | (Seeding, Stopped)
                | (Polling, Stopped)
                | (Fetching, Stopped)
        )
    }

    /// Moves to `next`, rejecting transitions the driver never makes
    pub fn transition(&mut self, next: DriverState) -> Result<(), CrawlError> {
        if !self.can_transition_to(next) {
            return Err(CrawlError::InvalidTransition {
                from: *self,
                to: next,
            });
        }
        tracing::trace!("Driver state {} -> {}", self, next);
        *self = next;
        Ok(())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seeding => "seeding",
            Self::Polling => "polling",
            Self::Fetching => "fetching",
            Self::Drained => "drained",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
