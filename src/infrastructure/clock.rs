//! Clock adapters.
//!
//! - [`SystemClock`]: Reads the system time, for production use
//! - [`FixedClock`]: Always answers the same instant, for fixtures and tests
//!
//! # Examples
//!
//! ```rust
//! use financial_summarization::application::Clock;
//! use financial_summarization::domain::value_objects::Timestamp;
//! use financial_summarization::infrastructure::FixedClock;
//!
//! let instant = Timestamp::parse("2024-03-10T12:00:00Z").unwrap();
//! let clock = FixedClock::new(instant);
//! assert_eq!(clock.now(), instant);
//! ```

use crate::application::Clock;
use crate::domain::value_objects::Timestamp;

// =============================================================================
// SystemClock
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

// =============================================================================
// FixedClock
// =============================================================================

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: Timestamp,
}

impl FixedClock {
    #[must_use]
    pub const fn new(instant: Timestamp) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.instant
    }
}

static_assertions::assert_impl_all!(SystemClock: Send, Sync);
static_assertions::assert_impl_all!(FixedClock: Send, Sync);
