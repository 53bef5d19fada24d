//! Minute-of-day clock arithmetic.
//!
//! The planner works on a circular clock of minutes since midnight. During
//! scheduling, raw minute values are allowed to exceed one day to represent
//! "tomorrow" while a window or interval wraps midnight; [`TimeOfDay`]
//! normalizes back onto the circle when a concrete clock time is needed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A time of day in minutes since midnight, always `< 1440`.
///
/// Parses from and displays as zero-padded `HH:MM`, which is also its
/// serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Build from an absolute minute count, wrapping modulo one day.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes % MINUTES_PER_DAY)
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> u32 {
        self.0
    }

    pub const fn hour(self) -> u32 {
        self.0 / 60
    }

    pub const fn minute(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ValidationError::InvalidTime(s.to_string());

        let (hours, minutes) = s.split_once(':').ok_or_else(bad)?;
        let hours: u32 = hours.trim().parse().map_err(|_| bad())?;
        let minutes: u32 = minutes.trim().parse().map_err(|_| bad())?;

        if hours >= 24 || minutes >= 60 {
            return Err(bad());
        }
        Ok(Self(hours * 60 + minutes))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_hhmm() {
        let t: TimeOfDay = "08:00".parse().unwrap();
        assert_eq!(t.minutes(), 480);
        assert_eq!(t.to_string(), "08:00");

        let t: TimeOfDay = "23:59".parse().unwrap();
        assert_eq!(t.minutes(), 1439);
        assert_eq!(t.to_string(), "23:59");
    }

    #[test]
    fn rejects_malformed_text() {
        assert!("8".parse::<TimeOfDay>().is_err());
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn from_minutes_wraps_past_midnight() {
        // 25:30 in absolute minutes is 01:30 tomorrow
        let t = TimeOfDay::from_minutes(1530);
        assert_eq!(t.to_string(), "01:30");
        assert_eq!(TimeOfDay::from_minutes(1440).minutes(), 0);
    }

    #[test]
    fn serde_uses_string_form() {
        let t: TimeOfDay = "12:05".parse().unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"12:05\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
