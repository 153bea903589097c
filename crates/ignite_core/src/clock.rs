//! Time capability consumed by the transaction store.
//!
//! # Responsibility
//! - Abstract "current point in time" behind a trait so stores stay
//!   deterministic under test clocks.
//!
//! # Invariants
//! - Timestamps are unix epoch milliseconds.
//! - `SystemClock` never panics; a pre-epoch system time reads as 0.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time for transaction creation timestamps.
pub trait Clock {
    /// Current time in unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock implementation backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Settable clock for tests and deterministic hosts.
///
/// Clones share the same underlying time, so a caller can keep a handle
/// and advance a clock already injected into a store.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(now_ms: i64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(now_ms)),
        }
    }

    /// Moves the clock to an absolute point in time.
    pub fn set(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }

    /// Advances the clock by `delta_ms`.
    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, SystemClock};

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z in epoch milliseconds.
        assert!(SystemClock.now_epoch_ms() > 1_577_836_800_000);
    }

    #[test]
    fn manual_clock_sets_and_advances() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_epoch_ms(), 1_000);
        clock.advance(500);
        assert_eq!(clock.now_epoch_ms(), 1_500);
        clock.set(42);
        assert_eq!(clock.now_epoch_ms(), 42);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(0);
        let handle = clock.clone();
        handle.advance(250);
        assert_eq!(clock.now_epoch_ms(), 250);
    }
}
