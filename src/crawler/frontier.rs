//! Deduplicating URL frontier
//!
//! The frontier tracks every URL ever seen during a run and republishes
//! genuinely new ones onto a bounded pending-work channel. It is the single
//! hand-off point between link discovery and fetching.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// Shared handle to the deduplicating frontier
///
/// Cloning is cheap; every clone shares the same seen-set and channel, so
/// discovery callbacks running on other tasks can `add` concurrently with
/// the driver draining the queue.
#[derive(Clone)]
pub struct Frontier {
    inner: Arc<FrontierInner>,
}

struct FrontierInner {
    /// Every URL ever accepted; only mutated inside `insert`
    seen: RwLock<HashSet<String>>,

    /// Producer side of the pending-work channel
    sender: mpsc::Sender<String>,

    /// URLs accepted into the seen-set but still waiting for channel space
    pending_sends: AtomicUsize,

    capacity: usize,
}

/// Consumer side of the pending-work channel
pub struct PendingReceiver {
    receiver: mpsc::Receiver<String>,
}

impl Frontier {
    /// Creates a frontier whose pending-work channel holds `capacity` URLs
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> (Self, PendingReceiver) {
        let capacity = capacity.max(1);
        let (sender, receiver) = mpsc::channel(capacity);

        let frontier = Self {
            inner: Arc::new(FrontierInner {
                seen: RwLock::new(HashSet::new()),
                sender,
                pending_sends: AtomicUsize::new(0),
                capacity,
            }),
        };

        (frontier, PendingReceiver { receiver })
    }

    /// Submits a candidate URL
    ///
    /// Empty URLs (a link element without an `href`) are ignored. A URL seen
    /// before is discarded silently. A new URL is recorded and enqueued; if
    /// the channel is full this waits until the consumer drains an entry.
    ///
    /// Returns true if the URL was new.
    pub async fn add(&self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }

        if !self.insert(url) {
            tracing::trace!("Already seen: {}", url);
            return false;
        }

        let _pending = PendingSend::new(&self.inner.pending_sends);
        if let Err(e) = self.inner.sender.send(url.to_string()).await {
            tracing::debug!("Pending queue closed, not queueing {}", e.0);
        } else {
            tracing::trace!("Queued: {}", url);
        }

        true
    }

    /// Records `url` as seen without queueing it
    ///
    /// Used for the seed, which the driver fetches directly. Returns true if
    /// the URL was new.
    pub fn mark_seen(&self, url: &str) -> bool {
        let url = url.trim();
        !url.is_empty() && self.insert(url)
    }

    /// Atomic check-and-insert into the seen-set
    fn insert(&self, url: &str) -> bool {
        let mut seen = self
            .inner
            .seen
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if seen.contains(url) {
            return false;
        }
        seen.insert(url.to_string())
    }

    /// Number of unique URLs seen so far
    pub fn count(&self) -> usize {
        self.inner
            .seen
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Returns true if `url` has been seen
    pub fn contains(&self, url: &str) -> bool {
        self.inner
            .seen
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(url.trim())
    }

    /// Number of accepted URLs still waiting for room in the channel
    pub fn pending_sends(&self) -> usize {
        self.inner.pending_sends.load(Ordering::SeqCst)
    }

    /// Capacity of the pending-work channel
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }
}

impl std::fmt::Debug for Frontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frontier")
            .field("seen", &self.count())
            .field("pending_sends", &self.pending_sends())
            .field("capacity", &self.inner.capacity)
            .finish()
    }
}

/// Counts an in-progress send; decrements on drop so an abandoned `add`
/// never leaves the counter raised
struct PendingSend<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> PendingSend<'a> {
    fn new(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for PendingSend<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

impl PendingReceiver {
    /// Takes the next pending URL without waiting
    pub fn try_next(&mut self) -> Option<String> {
        match self.receiver.try_recv() {
            Ok(url) => Some(url),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Closes the channel
    ///
    /// Adds blocked on a full channel wake up and give up; later adds still
    /// record their URL but do not queue it.
    pub fn close(&mut self) {
        self.receiver.close();
    }
}
