//! Time source and ID generation.
//!
//! New catalog items and contact submissions are keyed by their creation time
//! in milliseconds. [`IdSequence`] bumps the value whenever two creations land
//! in the same millisecond, so IDs stay unique and ordered for the lifetime of
//! the process.

use chrono::{DateTime, Utc};

/// A source of the current time.
pub trait Clock {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Strictly increasing millisecond sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdSequence {
    last: i64,
}

impl IdSequence {
    /// Create a sequence that has not issued any value yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Next value: the timestamp in milliseconds, or one past the previous
    /// value if the clock has not moved forward.
    pub fn next(&mut self, now: DateTime<Utc>) -> i64 {
        let candidate = now.timestamp_millis();
        self.last = if candidate > self.last {
            candidate
        } else {
            self.last.saturating_add(1)
        };
        self.last
    }

    /// Make sure future values are greater than `seen`.
    ///
    /// Used after loading persisted IDs so a clock that moved backwards
    /// cannot reissue them.
    pub fn observe(&mut self, seen: i64) {
        self.last = self.last.max(seen);
    }
}

#[cfg(any(test, feature = "test-util"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "test-util"))]
mod manual {
    use std::cell::Cell;

    use chrono::{DateTime, Duration, Utc};

    use super::Clock;

    /// A clock that only moves when told to.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Cell<DateTime<Utc>>,
    }

    impl ManualClock {
        /// Create a clock frozen at `start`.
        #[must_use]
        pub const fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Cell::new(start),
            }
        }

        /// Move the clock forward.
        pub fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_sequence_follows_clock() {
        let clock = ManualClock::new(Utc.timestamp_millis_opt(1_000).unwrap());
        let mut ids = IdSequence::new();
        assert_eq!(ids.next(clock.now()), 1_000);
        clock.advance(Duration::milliseconds(5));
        assert_eq!(ids.next(clock.now()), 1_005);
    }

    #[test]
    fn test_sequence_unique_within_same_millisecond() {
        let now = Utc.timestamp_millis_opt(42).unwrap();
        let mut ids = IdSequence::new();
        let first = ids.next(now);
        let second = ids.next(now);
        let third = ids.next(now);
        assert!(first < second && second < third);
    }

    #[test]
    fn test_sequence_skips_observed_values() {
        let mut ids = IdSequence::new();
        ids.observe(5_000);
        assert_eq!(ids.next(Utc.timestamp_millis_opt(10).unwrap()), 5_001);
    }
}
