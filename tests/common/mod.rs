//! Common test utilities for workflow integration tests.

#![allow(dead_code)]

use financial_summarization::domain::FinancialStatement;
use financial_summarization::domain::value_objects::{
    AccountId, ActorId, Amount, RecordId, StatementPeriod, Timestamp,
};
use financial_summarization::domain::{Actor, TrustLevel};
use financial_summarization::infrastructure::{AppDependencies, Fixture, StatementBatch};

pub const NOW: &str = "2024-03-10T12:00:00Z";

pub fn now() -> Timestamp {
    Timestamp::parse(NOW).unwrap()
}

pub fn days_before_now(days: u32) -> Timestamp {
    now().minus_days(days).unwrap()
}

pub fn non_combatant(id: u64) -> Actor {
    Actor::standard_user(ActorId::new(id), TrustLevel::NonCombatant)
}

pub fn trusted_operative(id: u64) -> Actor {
    Actor::standard_user(ActorId::new(id), TrustLevel::TrustedOperative)
}

pub struct StatementFactory;

impl StatementFactory {
    /// A statement whose period starts at `start` and lasts one day.
    pub fn starting_at(
        record: u64,
        owner: u64,
        account: u64,
        start: Timestamp,
    ) -> FinancialStatement {
        let end = Timestamp::from_unix_millis(start.unix_millis() + 86_400_000).unwrap();
        FinancialStatement {
            record_id: RecordId::new(record),
            owner_id: ActorId::new(owner),
            account_id: AccountId::new(account),
            amount: Amount::from_minor_units(1_000),
            created_at: end,
            period: StatementPeriod::new(start, end),
        }
    }

    /// A statement starting `days` days before [`now`].
    pub fn days_ago(record: u64, owner: u64, account: u64, days: u32) -> FinancialStatement {
        Self::starting_at(record, owner, account, days_before_now(days))
    }
}

/// Dependencies with a clock pinned at [`NOW`].
pub fn dependencies(
    actors: Vec<Actor>,
    statements: Vec<(u64, Vec<FinancialStatement>)>,
) -> AppDependencies {
    AppDependencies::from_fixture(Fixture {
        now: Some(now()),
        actors,
        statements: statements
            .into_iter()
            .map(|(actor_id, statements)| StatementBatch {
                actor_id: ActorId::new(actor_id),
                statements,
            })
            .collect(),
    })
}
