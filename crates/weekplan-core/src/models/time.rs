//! The validated `HH:MM` time-of-day slot key.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WeekplanError;

/// A wall-clock time of day in canonical `HH:MM` 24-hour form.
///
/// Used as the uniqueness key within a weekday. The derived `Ord` compares
/// numerically by (hour, minute), so ordered collections keyed by
/// `TimeOfDay` enumerate chronologically. Serializes as the `HH:MM` string,
/// which makes it usable as a JSON map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> crate::Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(WeekplanError::InvalidTime {
                value: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// The hour component (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// The minute component (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeOfDay {
    type Err = WeekplanError;

    /// Parses the strict `HH:MM` form: exactly two digits, a colon, two
    /// digits. Anything else (including `8:00` or `08:00:00`) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WeekplanError::InvalidTime {
            value: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        if ![bytes[0], bytes[1], bytes[3], bytes[4]]
            .iter()
            .all(u8::is_ascii_digit)
        {
            return Err(invalid());
        }

        let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
