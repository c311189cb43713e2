use crate::output::traits::{Listing, OutputError, OutputResult, RecordSink};
use std::sync::Mutex;

/// In-memory record sink that keeps listings in write order
#[derive(Debug, Default)]
pub struct MemorySink {
    listings: Mutex<Vec<Listing>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every listing written so far
    pub fn listings(&self) -> Vec<Listing> {
        match self.listings.lock() {
            Ok(listings) => listings.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the URLs of the written listings, in write order
    pub fn urls(&self) -> Vec<String> {
        self.listings().into_iter().map(|l| l.url).collect()
    }
}

impl RecordSink for MemorySink {
    fn write(&self, listing: &Listing) -> OutputResult<()> {
        self.listings
            .lock()
            .map_err(|e| OutputError::Poisoned(e.to_string()))?
            .push(listing.clone());
        Ok(())
    }

    fn flush(&self) -> OutputResult<()> {
        Ok(())
    }

    fn written(&self) -> u64 {
        self.listings.lock().map(|l| l.len() as u64).unwrap_or(0)
    }
}
