//! Summarization of an actor's statements over a trailing window.
//!
//! [`summarize`] is pure apart from the `now` it is handed. It checks that
//! the statements form a consistent set and keeps only those whose period
//! starts inside the window.
//!
//! # Steps
//!
//! 1. Every statement must be owned by the actor (`ForeignOwnerIds`)
//! 2. All statements must share a single account (`TooManyAccounts`)
//! 3. `window_start = now - max_days_to_process` calendar days
//! 4. Keep statements with `period.start >= window_start`, in input order
//!
//! The ownership check runs first, so it is the one reported when both
//! conditions fail.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::actor::Actor;
use super::statement::FinancialStatement;
use super::value_objects::{AccountId, ActorId, Timestamp};

/// Integrity problems found in the statements handed to [`summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The statements span more than one account.
    #[error("statements for actor {actor_id} span several accounts: {account_ids:?}")]
    TooManyAccounts {
        actor_id: ActorId,
        /// Distinct account ids, in first-seen order.
        account_ids: Vec<AccountId>,
    },

    /// Some statements belong to somebody else.
    #[error("statements for actor {actor_id} include foreign owners: {bad_ids:?}")]
    ForeignOwnerIds {
        actor_id: ActorId,
        /// Every mismatching owner id, duplicates kept, in input order.
        bad_ids: Vec<ActorId>,
    },

    /// The window start cannot be represented.
    #[error("cannot go back {max_days_to_process} days from {now}")]
    WindowOutOfRange {
        now: Timestamp,
        max_days_to_process: u32,
    },

    /// The statements could not be retrieved at all.
    #[error("statements for actor {actor_id} are unavailable: {reason}")]
    StatementsUnavailable { actor_id: ActorId, reason: String },
}

/// Statements retained for an actor, and the window they were filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationResult {
    pub actor: Actor,
    pub window_start: Timestamp,
    pub statements: Vec<FinancialStatement>,
}

/// Validates `statements` for `actor` and filters them to the trailing
/// `max_days_to_process` calendar days before `now`.
///
/// An empty statement list is valid and produces an empty result.
///
/// # Errors
///
/// - [`DataError::ForeignOwnerIds`] if any statement is owned by another actor
/// - [`DataError::TooManyAccounts`] if the statements span several accounts
/// - [`DataError::WindowOutOfRange`] if the window start is not representable
///
/// # Examples
///
/// ```rust
/// use financial_summarization::domain::{Actor, TrustLevel, summarize};
/// use financial_summarization::domain::value_objects::{ActorId, Timestamp};
///
/// let actor = Actor::standard_user(ActorId::new(1), TrustLevel::NonCombatant);
/// let now = Timestamp::parse("2024-03-10T12:00:00Z").unwrap();
///
/// let result = summarize(&actor, Vec::new(), 3, now).unwrap();
/// assert_eq!(result.window_start, Timestamp::parse("2024-03-07T12:00:00Z").unwrap());
/// assert!(result.statements.is_empty());
/// ```
pub fn summarize(
    actor: &Actor,
    statements: Vec<FinancialStatement>,
    max_days_to_process: u32,
    now: Timestamp,
) -> Result<SummarizationResult, DataError> {
    let actor_id = actor.id();

    let bad_ids = foreign_owner_ids(&statements, actor_id);
    if !bad_ids.is_empty() {
        return Err(DataError::ForeignOwnerIds { actor_id, bad_ids });
    }

    let account_ids = distinct_account_ids(&statements);
    if account_ids.len() > 1 {
        return Err(DataError::TooManyAccounts {
            actor_id,
            account_ids,
        });
    }

    let window_start = now
        .minus_days(max_days_to_process)
        .ok_or(DataError::WindowOutOfRange {
            now,
            max_days_to_process,
        })?;

    let retained = statements
        .into_iter()
        .filter(|statement| statement.period.starts_within(&window_start))
        .collect();

    Ok(SummarizationResult {
        actor: *actor,
        window_start,
        statements: retained,
    })
}

fn foreign_owner_ids(statements: &[FinancialStatement], actor_id: ActorId) -> Vec<ActorId> {
    statements
        .iter()
        .filter(|statement| !statement.is_owned_by(actor_id))
        .map(|statement| statement.owner_id)
        .collect()
}

fn distinct_account_ids(statements: &[FinancialStatement]) -> Vec<AccountId> {
    let mut seen = HashSet::new();
    statements
        .iter()
        .map(|statement| statement.account_id)
        .filter(|account_id| seen.insert(*account_id))
        .collect()
}
