//! Statement period value object.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// The span of time a statement covers.
///
/// Only `start` takes part in the summarization window check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatementPeriod {
    /// First instant covered by the statement.
    pub start: Timestamp,
    /// Last instant covered by the statement.
    pub end: Timestamp,
}

impl StatementPeriod {
    #[must_use]
    pub const fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns `true` when the period starts at or after `window_start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use financial_summarization::domain::value_objects::{StatementPeriod, Timestamp};
    ///
    /// let start = Timestamp::from_unix_millis(1_000).unwrap();
    /// let end = Timestamp::from_unix_millis(2_000).unwrap();
    /// let period = StatementPeriod::new(start, end);
    ///
    /// assert!(period.starts_within(&start));
    /// assert!(!period.starts_within(&end));
    /// ```
    #[must_use]
    pub fn starts_within(&self, window_start: &Timestamp) -> bool {
        !self.start.is_before(window_start)
    }
}
