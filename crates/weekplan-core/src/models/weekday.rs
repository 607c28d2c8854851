//! The fixed seven-day week enumeration.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::WeekplanError;

/// Type-safe enumeration of the seven weekdays, Monday-first.
///
/// The declaration order is the stable ordinal used for iteration and for
/// planner-document key ordering, so the derived `Ord` sorts Monday before
/// Sunday. Serialization uses the English display spelling, which is also
/// the key form in the planner document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven weekdays in week order, Monday-first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns an iterator over the weekdays in week order.
    pub fn all() -> impl Iterator<Item = Weekday> {
        Self::ALL.into_iter()
    }

    /// Returns the display name of the weekday.
    pub fn display_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Returns the stable Monday-first position of the weekday (0..=6).
    pub fn position(self) -> usize {
        self as usize
    }
}

impl FromStr for Weekday {
    type Err = WeekplanError;

    /// Parses a weekday from its display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(WeekplanError::InvalidWeekday {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
