//! The capture gate: the only state that straddles polling cycles.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use crate::Fingerprint;

/// Explicit capture state, owned by whatever process hosts the scheduler.
///
/// One fingerprint slot and one delivery counter; everything else in the
/// pipeline is recomputed fresh every cycle. The slot is only ever written
/// from the tick context. The counter is shared with detached dispatch tasks,
/// which increment it on confirmed delivery.
#[derive(Debug, Default)]
pub struct CaptureContext {
    last_fingerprint: Option<Fingerprint>,
    deliveries: Arc<AtomicU64>,
}

impl CaptureContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `fingerprint` when it differs from the last delivered one.
    ///
    /// Admission stamps the slot immediately, before the caller attempts
    /// delivery. The gate is optimistic: a failed dispatch does not roll the
    /// slot back, so the same exchange is never offered twice.
    #[must_use]
    pub fn admit(&mut self, fingerprint: Fingerprint) -> bool {
        if self.last_fingerprint.as_ref() == Some(&fingerprint) {
            return false;
        }

        self.last_fingerprint = Some(fingerprint);
        true
    }

    /// Number of confirmed deliveries since startup.
    #[must_use]
    pub fn deliveries(&self) -> u64 {
        self.deliveries.load(Ordering::Relaxed)
    }

    /// Handle for dispatch tasks to record confirmed deliveries on.
    pub(crate) fn delivery_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.deliveries)
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
