//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `DriverState`: the phase of the crawl driver (seeding, polling, fetching, drained, stopped)
//! - `IdleTracker`: quiescence detection based on an idle timer

mod driver_state;
mod idle;

// Re-export main types
pub use driver_state::DriverState;
pub use idle::IdleTracker;
