//! Value objects for the summarization domain.
//!
//! Value objects are immutable and compared by value. Statements, actors and
//! summarization results are all assembled from them.
//!
//! # Available Value Objects
//!
//! - [`ActorId`], [`AccountId`], [`RecordId`] - Integer identifiers
//! - [`Amount`] - Signed amount in minor currency units
//! - [`Timestamp`] - UTC instant with calendar-day arithmetic
//! - [`StatementPeriod`] - Start and end of a statement

mod amount;
mod identifiers;
mod period;
mod timestamp;

pub use amount::Amount;
pub use identifiers::{AccountId, ActorId, RecordId};
pub use period::StatementPeriod;
pub use timestamp::Timestamp;
