//! Test utilities shared by unit tests and the integration suites in
//! `tests/`. Compiled for `cfg(test)` and the `test-support` feature.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

/// Fixed instant most suites start their clock at.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Clock whose current instant is set explicitly by the test.
///
/// # Examples
///
/// ```rust
/// use chrono::TimeDelta;
/// use mockable::Clock;
/// use inventory_backend::test_support::{FixtureClock, fixture_timestamp};
///
/// let clock = FixtureClock::new(fixture_timestamp());
/// clock.advance(TimeDelta::days(10));
/// assert_eq!(clock.utc(), fixture_timestamp() + TimeDelta::days(10));
/// ```
#[derive(Debug)]
pub struct FixtureClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixtureClock {
    /// Start the clock at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the clock by `delta`, which may be negative.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Default for FixtureClock {
    fn default() -> Self {
        Self::new(fixture_timestamp())
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
