//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used for parsing and displaying birthdays (`DD.MM.YYYY`).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// Parses `DD.MM.YYYY` input at construction time and stores the parsed
/// calendar date, not the raw string. Impossible dates such as
/// `31.02.2024` are rejected. `Display` renders back to `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use abook::domain::Birthday;
///
/// let birthday = Birthday::new("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input does not parse
    /// as a valid Gregorian calendar date in that format.
    pub fn new(date: impl AsRef<str>) -> Result<Self, ValidationError> {
        let date = date.as_ref();
        NaiveDate::parse_from_str(date, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))
    }

    /// Get the stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Compute the next occurrence of this birthday's month/day on or
    /// after `reference`, rolling to the following year when this year's
    /// date has already passed.
    ///
    /// A February 29 birthday falls on March 1 in non-leap years.
    pub fn next_occurrence(&self, reference: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(reference.year());
        if this_year >= reference {
            this_year
        } else {
            self.occurrence_in(reference.year() + 1)
        }
    }

    /// Days from `reference` to the next occurrence (0 when the birthday
    /// is on `reference` itself).
    pub fn days_until(&self, reference: NaiveDate) -> i64 {
        (self.next_occurrence(reference) - reference).num_days()
    }

    /// The month/day occurrence in a given year.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            // Only Feb 29 in a non-leap year can fail; March 1 always exists
            NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 is a valid date")
        })
    }
}

// Serde support - serialize as DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
