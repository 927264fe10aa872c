//! Financial statements read by the summarization.

use serde::{Deserialize, Serialize};

use super::value_objects::{AccountId, ActorId, Amount, RecordId, StatementPeriod, Timestamp};

/// A single statement record, produced outside this crate.
///
/// # Examples
///
/// ```rust
/// use financial_summarization::domain::FinancialStatement;
/// use financial_summarization::domain::value_objects::{
///     AccountId, ActorId, Amount, RecordId, StatementPeriod, Timestamp,
/// };
///
/// let start = Timestamp::parse("2024-03-01T00:00:00Z").unwrap();
/// let end = Timestamp::parse("2024-03-31T23:59:59Z").unwrap();
///
/// let statement = FinancialStatement {
///     record_id: RecordId::new(1),
///     owner_id: ActorId::new(7),
///     account_id: AccountId::new(10),
///     amount: Amount::from_minor_units(12_500),
///     created_at: end,
///     period: StatementPeriod::new(start, end),
/// };
///
/// assert!(statement.is_owned_by(ActorId::new(7)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinancialStatement {
    pub record_id: RecordId,
    pub owner_id: ActorId,
    pub account_id: AccountId,
    pub amount: Amount,
    pub created_at: Timestamp,
    pub period: StatementPeriod,
}

impl FinancialStatement {
    #[must_use]
    pub fn is_owned_by(&self, actor_id: ActorId) -> bool {
        self.owner_id == actor_id
    }
}
