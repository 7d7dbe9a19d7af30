//! Time-of-day parsing for task start/end strings.
//!
//! Task times stay free-form strings on the record; this module only
//! interprets them when a duration is needed.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static TIME_24H_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").expect("valid 24h time regex"));
static TIME_12H_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(1[0-2]|0?[1-9]):([0-5]\d)\s*([aApP])\.?[mM]\.?$").expect("valid 12h time regex")
});

const MINUTES_PER_HOUR: u16 = 60;

/// Minutes since midnight, `0..1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Builds a time from 24h components.
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(u16::from(hour) * MINUTES_PER_HOUR + u16::from(minute)))
    }

    pub fn hour(self) -> u8 {
        (self.0 / MINUTES_PER_HOUR) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % MINUTES_PER_HOUR) as u8
    }

    pub fn minutes_since_midnight(self) -> u16 {
        self.0
    }

    /// Accepts `HH:MM` (24h) and `h:mm am|pm` (12h).
    pub fn parse(value: &str) -> Result<Self, TimeParseError> {
        let trimmed = value.trim();
        if let Some(caps) = TIME_24H_RE.captures(trimmed) {
            return build(&caps[1], &caps[2], None, trimmed);
        }
        if let Some(caps) = TIME_12H_RE.captures(trimmed) {
            let pm = caps[3].eq_ignore_ascii_case("p");
            return build(&caps[1], &caps[2], Some(pm), trimmed);
        }
        Err(TimeParseError(trimmed.to_string()))
    }
}

fn build(
    hour: &str,
    minute: &str,
    pm: Option<bool>,
    raw: &str,
) -> Result<TimeOfDay, TimeParseError> {
    let invalid = || TimeParseError(raw.to_string());
    let hour: u8 = hour.parse().map_err(|_| invalid())?;
    let minute: u8 = minute.parse().map_err(|_| invalid())?;
    let hour = match pm {
        None => hour,
        Some(false) => hour % 12,
        Some(true) => hour % 12 + 12,
    };
    TimeOfDay::from_hm(hour, minute).ok_or_else(invalid)
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Minutes between two free-form times; 0 when either is unparseable or the
/// window does not move forward within one day.
pub fn span_minutes(start: &str, end: &str) -> u32 {
    match (TimeOfDay::parse(start), TimeOfDay::parse(end)) {
        (Ok(start), Ok(end)) if end > start => {
            u32::from(end.minutes_since_midnight() - start.minutes_since_midnight())
        }
        _ => 0,
    }
}

/// Unrecognized time-of-day string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParseError(pub String);

impl Display for TimeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized time of day: `{}`", self.0)
    }
}

impl Error for TimeParseError {}
