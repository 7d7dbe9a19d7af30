//! Monday-first day-of-week index.
//!
//! # Invariants
//! - A `DayIndex` always holds a value in `0..=6` (Monday=0 .. Sunday=6).
//! - Deserialization rejects out-of-range numbers instead of clamping.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of day buckets in one planner week.
pub const DAYS_IN_WEEK: usize = 7;

const DAY_NAMES: [&str; DAYS_IN_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Validated day-of-week position inside the weekly plan.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayIndex(u8);

impl DayIndex {
    pub const MONDAY: DayIndex = DayIndex(0);
    pub const TUESDAY: DayIndex = DayIndex(1);
    pub const WEDNESDAY: DayIndex = DayIndex(2);
    pub const THURSDAY: DayIndex = DayIndex(3);
    pub const FRIDAY: DayIndex = DayIndex(4);
    pub const SATURDAY: DayIndex = DayIndex(5);
    pub const SUNDAY: DayIndex = DayIndex(6);

    /// Creates an index from a raw day number.
    pub fn new(value: u8) -> Result<Self, DayIndexError> {
        if usize::from(value) < DAYS_IN_WEEK {
            Ok(Self(value))
        } else {
            Err(DayIndexError(i64::from(value)))
        }
    }

    /// Creates an index from any signed raw number (e.g. untrusted UI input).
    pub fn from_raw(value: i64) -> Result<Self, DayIndexError> {
        u8::try_from(value)
            .ok()
            .and_then(|value| Self::new(value).ok())
            .ok_or(DayIndexError(value))
    }

    /// Monday-based index of a chrono weekday.
    pub fn from_weekday(weekday: Weekday) -> Self {
        // num_days_from_monday() is always in 0..=6.
        Self(weekday.num_days_from_monday() as u8)
    }

    /// Monday-based index of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }

    /// Iterates all seven days in week order.
    pub fn all() -> impl Iterator<Item = DayIndex> {
        (0..DAYS_IN_WEEK as u8).map(DayIndex)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Position usable for array indexing.
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }

    /// English day name, e.g. `Monday`.
    pub fn name(self) -> &'static str {
        DAY_NAMES[self.as_usize()]
    }
}

impl TryFrom<u8> for DayIndex {
    type Error = DayIndexError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayIndex> for u8 {
    fn from(value: DayIndex) -> Self {
        value.0
    }
}

impl Display for DayIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Day number outside `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayIndexError(pub i64);

impl Display for DayIndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "day index {} is out of range 0..=6", self.0)
    }
}

impl Error for DayIndexError {}
