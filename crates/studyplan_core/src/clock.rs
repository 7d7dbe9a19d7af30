//! Wall-clock collaborator.

use chrono::{Local, NaiveDate};

/// Source of timestamps and the current calendar date.
pub trait Clock {
    /// Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
    /// Local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub now_epoch_ms: i64,
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn new(now_epoch_ms: i64, today: NaiveDate) -> Self {
        Self {
            now_epoch_ms,
            today,
        }
    }
}

impl Clock for FixedClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now_epoch_ms
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
