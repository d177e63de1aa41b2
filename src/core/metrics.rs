//! Delivery counters for pipeline observability
//!
//! The queue is unbounded, so nothing is ever dropped; these counters exist
//! to make a sustained producer/consumer imbalance visible to operators.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct DeliveryStats {
    /// Records accepted onto the pending queue
    enqueued: AtomicU64,

    /// Records fully fanned out by the drain thread
    delivered: AtomicU64,

    /// Individual sink write failures observed during drain
    sink_errors: AtomicU64,
}

impl DeliveryStats {
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_errors(&self) -> u64 {
        self.sink_errors.load(Ordering::Relaxed)
    }

    /// Records accepted but not yet fanned out.
    pub fn pending(&self) -> u64 {
        self.enqueued().saturating_sub(self.delivered())
    }

    #[inline]
    pub(crate) fn record_enqueued(&self) {
        self.enqueued.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_sink_error(&self) {
        self.sink_errors.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for DeliveryStats {
    fn default() -> Self {
        Self::new()
    }
}
