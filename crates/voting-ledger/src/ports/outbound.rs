//! # Outbound Ports
//!
//! Dependencies the ledger reads from but never controls.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::Timestamp;

/// Time source for window checks.
///
/// Readings must be monotonic non-decreasing within a run.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in seconds.
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            // Clock before the epoch reads as 0 rather than panicking
            .unwrap_or(0)
    }
}

/// Manually driven clock for tests and simulated sessions.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    time: AtomicU64,
}

impl ManualTimeSource {
    /// Start the clock at `initial`.
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: AtomicU64::new(initial),
        }
    }

    /// Move the clock forward by `secs`, stopping at `u64::MAX`.
    pub fn advance(&self, secs: u64) {
        // The closure never returns None, so the update always lands.
        let _ = self
            .time
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| {
                Some(t.saturating_add(secs))
            });
    }

    /// Jump to `time`. Callers are responsible for keeping it monotonic.
    pub fn set(&self, time: Timestamp) {
        self.time.store(time, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_source() {
        let now = SystemTimeSource.now();
        // Jan 1, 2020 in seconds
        assert!(now > 1_577_836_800);
    }

    #[test]
    fn test_manual_time_source() {
        let source = ManualTimeSource::new(1000);
        assert_eq!(source.now(), 1000);

        source.advance(500);
        assert_eq!(source.now(), 1500);

        source.set(3000);
        assert_eq!(source.now(), 3000);
    }

    #[test]
    fn test_advance_saturates() {
        let source = ManualTimeSource::new(1_100);
        source.advance(u64::MAX);
        assert_eq!(source.now(), u64::MAX);

        source.advance(1);
        assert_eq!(source.now(), u64::MAX);
    }

    #[test]
    fn test_shared_time_source() {
        let source = Arc::new(ManualTimeSource::new(10));
        let shared = Arc::clone(&source);
        source.advance(5);
        assert_eq!(shared.now(), 15);
    }
}
