mod consts;
mod convert;
mod prelude;
mod range;
mod types;

pub use consts::*;
pub use convert::GregorianDate;
pub use range::{DateRangeQuery, RangeError};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::convert::TryFrom;
use std::str::FromStr;

/// A date in the Jalali (Persian solar Hijri) calendar.
///
/// Month and day are range-checked on construction (month 1..=12, day
/// 1..=31); the day is deliberately not checked against the true length of
/// its month, so a calendrically impossible day still constructs and
/// converts deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaliDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    InvalidDay(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl JalaliDate {
    /// Creates a new date from already-validated components
    pub const fn new(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a new date from raw components, applying the coarse range
    /// checks (year 1..=9999, month 1..=12, day 1..=31)
    ///
    /// # Errors
    /// Returns the corresponding `ParseError` for the first component out
    /// of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: types::Year::new(year)?,
            month: types::Month::new(month)?,
            day: types::Day::new(day)?,
        })
    }

    /// Returns the year (as u16 for convenience)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> types::Day {
        self.day
    }
}

/// Maps Persian-script digits (U+06F0..U+06F9) to their Latin equivalents,
/// leaving every other character untouched.
#[allow(clippy::cast_possible_truncation)]
fn normalize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => {
                char::from(b'0' + (u32::from(c) - u32::from('\u{06F0}')) as u8)
            }
            other => other,
        })
        .collect()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_month_day_field(s: &str) -> bool {
    s.len() <= MONTH_DAY_MAX_DIGITS && is_digits(s)
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let normalized = normalize_digits(trimmed);

        // Anchored shape: 4 digits, separator, 1-2 digits, separator,
        // 1-2 digits. Each separator is independently '/' or '-'.
        let parts: Vec<&str> = normalized.split(FIELD_SEPARATORS).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        if parts[0].len() != YEAR_DIGITS
            || !is_digits(parts[0])
            || !is_month_day_field(parts[1])
            || !is_month_day_field(parts[2])
        {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::from_ymd(year, month, day)
    }
}

impl JalaliDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(u16, u8, u8)> for JalaliDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(value.0, value.1, value.2)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a free-text Jalali date and renders its Gregorian equivalent as
/// an ISO-8601 `YYYY-MM-DD` string.
///
/// Returns `None` for any input that does not parse; callers treat that as
/// "no date filter applied" rather than an error.
pub fn to_gregorian_iso(input: &str) -> Option<String> {
    input
        .parse::<JalaliDate>()
        .ok()
        .map(|date| date.to_gregorian().to_string())
}
