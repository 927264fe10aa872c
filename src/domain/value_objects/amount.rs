//! Monetary amount in minor currency units.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A signed amount expressed in minor currency units (cents, pence, ...).
///
/// Statements are produced externally and only read here, so no currency
/// arithmetic is offered beyond construction and inspection.
///
/// # Examples
///
/// ```rust
/// use financial_summarization::domain::value_objects::Amount;
///
/// let amount = Amount::from_minor_units(-1_250);
/// assert!(amount.is_negative());
/// assert_eq!(amount.minor_units(), -1_250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    #[must_use]
    pub const fn from_minor_units(minor_units: i64) -> Self {
        Self(minor_units)
    }

    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
