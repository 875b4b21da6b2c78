//! Cooperative stop signal shared between a subscription handle and its loop.
//!
//! Checking the signal never blocks, so the poll loop can test it between
//! batches without waiting on the consumer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A one-way stop flag. Once raised it stays raised.
///
/// Clones share state: raising the flag through any clone is visible to all.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    stopped: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag. Idempotent.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
