//! Timestamp value object.
//!
//! Provides a strongly-typed UTC instant for statement periods, creation
//! times and summarization windows.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Days, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A UTC instant with millisecond-or-better precision.
///
/// `Timestamp` wraps `chrono::DateTime<Utc>` so that window arithmetic and
/// ordering are expressed in domain terms.
///
/// # Examples
///
/// ```rust
/// use financial_summarization::domain::value_objects::Timestamp;
///
/// let parsed = Timestamp::parse("2024-01-15T10:30:00Z");
/// assert!(parsed.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp representing the current moment in UTC.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix epoch milliseconds.
    ///
    /// Returns `None` if the milliseconds are out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use financial_summarization::domain::value_objects::Timestamp;
    ///
    /// let timestamp = Timestamp::from_unix_millis(1_705_312_200_000);
    /// assert!(timestamp.is_some());
    /// ```
    #[must_use]
    pub fn from_unix_millis(milliseconds: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(milliseconds).single().map(Self)
    }

    /// Parses a timestamp from an ISO 8601 formatted string.
    ///
    /// Accepts RFC 3339 values with an offset, and naive values (with or
    /// without fractional seconds) which are taken to be UTC.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
            return Some(Self(datetime.with_timezone(&Utc)));
        }

        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
    }

    /// Creates a timestamp from a `DateTime<Utc>`.
    #[must_use]
    pub const fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Returns the underlying `DateTime<Utc>`.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the timestamp as Unix epoch milliseconds.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // chrono::DateTime::timestamp_millis is not const
    pub fn unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Subtracts whole calendar days, keeping the time of day.
    ///
    /// Returns `None` when the result falls outside the representable range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use financial_summarization::domain::value_objects::Timestamp;
    ///
    /// let now = Timestamp::parse("2024-03-10T12:00:00Z").unwrap();
    /// let earlier = now.minus_days(3).unwrap();
    /// assert_eq!(earlier, Timestamp::parse("2024-03-07T12:00:00Z").unwrap());
    /// ```
    #[must_use]
    pub fn minus_days(&self, days: u32) -> Option<Self> {
        self.0
            .checked_sub_days(Days::new(u64::from(days)))
            .map(Self)
    }

    /// Returns the ISO 8601 formatted string representation.
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Returns `true` if this timestamp is strictly before another.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.to_iso_string())
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}
