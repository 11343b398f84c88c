use serde::{Deserialize, Serialize};

use crate::{JalaliDate, ParseError};

/// A sales-report date filter: two optional Jalali bounds, inclusive on
/// both sides. An absent bound means the range is unbounded on that side
/// and the corresponding query parameter is omitted entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct DateRangeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<JalaliDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<JalaliDate>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Lower bound is after the upper bound.
    #[error("Invalid date range: from ({from}) is after to ({to})")]
    InvalidRange { from: JalaliDate, to: JalaliDate },

    /// Error parsing a bound.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl DateRangeQuery {
    /// The range with no bounds on either side
    pub const UNBOUNDED: Self = Self {
        from: None,
        to: None,
    };

    /// Creates a new range with ordering validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if both bounds are present and
    /// `from > to`.
    pub fn new(from: Option<JalaliDate>, to: Option<JalaliDate>) -> Result<Self, RangeError> {
        match (from, to) {
            (Some(f), Some(t)) if f > t => Err(RangeError::InvalidRange { from: f, to: t }),
            _ => Ok(Self { from, to }),
        }
    }

    /// Builds a range from two free-text inputs, silently dropping any
    /// side that does not parse. This matches the filter-field behavior:
    /// malformed input means "no bound set", never an error.
    pub fn from_inputs(from: &str, to: &str) -> Self {
        Self {
            from: from.parse().ok(),
            to: to.parse().ok(),
        }
    }

    /// Builds a range from two inputs, strictly. A blank input means
    /// unbounded on that side; anything else must parse, and the bounds
    /// must be ordered.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` for a non-blank input that does
    /// not parse, or `RangeError::InvalidRange` for misordered bounds.
    pub fn from_strs(from: &str, to: &str) -> Result<Self, RangeError> {
        Self::new(Self::parse_bound(from)?, Self::parse_bound(to)?)
    }

    fn parse_bound(input: &str) -> Result<Option<JalaliDate>, RangeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(trimmed.parse::<JalaliDate>()?))
    }

    /// Returns the lower bound, if set
    pub const fn start(&self) -> Option<JalaliDate> {
        self.from
    }

    /// Returns the upper bound, if set
    pub const fn end(&self) -> Option<JalaliDate> {
        self.to
    }

    /// Returns both bounds as a tuple
    pub const fn bounds(&self) -> (Option<JalaliDate>, Option<JalaliDate>) {
        (self.from, self.to)
    }

    /// True if neither bound is set
    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Converts both bounds to Gregorian ISO-8601 strings, the form the
    /// report endpoint consumes.
    pub fn gregorian_bounds(&self) -> (Option<String>, Option<String>) {
        (
            self.from.map(|date| date.to_gregorian().to_string()),
            self.to.map(|date| date.to_gregorian().to_string()),
        )
    }

    /// Renders the range as `from`/`to` query parameters. Absent bounds
    /// produce no pair at all, never an empty string.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let (from, to) = self.gregorian_bounds();
        let mut pairs = Vec::with_capacity(2);
        if let Some(from) = from {
            pairs.push(("from", from));
        }
        if let Some(to) = to {
            pairs.push(("to", to));
        }
        pairs
    }

    /// Checks whether a date falls within the range (inclusive); an absent
    /// bound never excludes.
    pub fn contains(&self, date: &JalaliDate) -> bool {
        self.from.is_none_or(|from| from <= *date) && self.to.is_none_or(|to| *date <= to)
    }
}

impl<'de> Deserialize<'de> for DateRangeQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            from: Option<JalaliDate>,
            #[serde(default)]
            to: Option<JalaliDate>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.from, raw.to).map_err(serde::de::Error::custom)
    }
}
