//! Integer identifiers for actors, accounts and statement records.
//!
//! Each identifier is a distinct newtype so that an account id can never be
//! compared against an owner id by accident.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! integer_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw identifier value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

integer_identifier!(
    /// Identity of an [`Actor`](crate::domain::Actor).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use financial_summarization::domain::value_objects::ActorId;
    ///
    /// let id = ActorId::new(42);
    /// assert_eq!(id.value(), 42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    ActorId
);

integer_identifier!(
    /// Identity of the account a statement belongs to.
    AccountId
);

integer_identifier!(
    /// Identity of a single statement record.
    RecordId
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identifiers_compare_by_value() {
        assert_eq!(ActorId::new(7), ActorId::from(7));
        assert_ne!(AccountId::new(10), AccountId::new(20));
        assert!(RecordId::new(1) < RecordId::new(2));
    }

    #[rstest]
    fn identifiers_serialize_transparently() {
        let json = serde_json::to_string(&AccountId::new(10)).unwrap();
        assert_eq!(json, "10");

        let parsed: ActorId = serde_json::from_str("99").unwrap();
        assert_eq!(parsed, ActorId::new(99));
    }
}
