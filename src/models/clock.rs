use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::Timelike;
use serde::{Serialize, Serializer};
use std::fmt;

/// Wall-clock time of day at minute resolution.
///
/// Parsed values are always within `00:00..=23:59`. The only value outside
/// that range is [`ClockTime::END_OF_DAY`], used for synthetic closing
/// checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const END_OF_DAY: ClockTime = ClockTime {
        hour: 24,
        minute: 0,
    };

    pub fn new(hour: u8, minute: u8) -> AppResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Parse an `HH:MM` string.
    ///
    /// Parsing is chrono's `%H:%M`, which also takes single-digit fields:
    /// `"9:30"` is 09:30 and `"09:5"` is 09:05.
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn is_end_of_day(&self) -> bool {
        *self == Self::END_OF_DAY
    }

    /// Position on the 0..24 axis, e.g. `09:45` → `9.75`.
    pub fn as_fractional_hours(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Serialized as `"HH:MM"`, the same shape it is read from.
impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
