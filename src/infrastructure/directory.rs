//! In-memory actor directory and statement store.
//!
//! Both adapters keep their data behind a [`parking_lot::RwLock`] so they can
//! be seeded after construction and shared across concurrent workflow runs.
//! Either can be switched offline to make every call fail, which is how the
//! lookup and retrieval failure paths are exercised end to end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::application::{ActorLookup, GatewayError, GatewayResult, StatementSource};
use crate::domain::value_objects::ActorId;
use crate::domain::{Actor, FinancialStatement};

// =============================================================================
// InMemoryActorDirectory
// =============================================================================

#[derive(Debug, Default)]
pub struct InMemoryActorDirectory {
    actors: RwLock<HashMap<ActorId, Actor>>,
    offline: AtomicBool,
}

impl InMemoryActorDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory holding `actors`. A later actor with a repeated id
    /// replaces the earlier one.
    #[must_use]
    pub fn with_actors(actors: impl IntoIterator<Item = Actor>) -> Self {
        let directory = Self::new();
        for actor in actors {
            directory.insert(actor);
        }
        directory
    }

    pub fn insert(&self, actor: Actor) {
        self.actors.write().insert(actor.id(), actor);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.read().is_empty()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

impl ActorLookup for InMemoryActorDirectory {
    fn get(&self, actor_id: ActorId) -> GatewayResult<Option<Actor>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(GatewayError::new("get_actor", "actor directory is offline"));
        }

        let actor = self.actors.read().get(&actor_id).copied();
        tracing::debug!(%actor_id, found = actor.is_some(), "Actor lookup");
        Ok(actor)
    }
}

// =============================================================================
// InMemoryStatementStore
// =============================================================================

/// Statement lists keyed by the actor they are served to.
///
/// The store hands back whatever was filed under an actor without checking
/// ownership, so it can reproduce upstream data that is inconsistent.
#[derive(Debug, Default)]
pub struct InMemoryStatementStore {
    statements: RwLock<HashMap<ActorId, Vec<FinancialStatement>>>,
    offline: AtomicBool,
}

impl InMemoryStatementStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `statements` to the list served for `actor_id`.
    pub fn file(
        &self,
        actor_id: ActorId,
        statements: impl IntoIterator<Item = FinancialStatement>,
    ) {
        self.statements
            .write()
            .entry(actor_id)
            .or_default()
            .extend(statements);
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

impl StatementSource for InMemoryStatementStore {
    fn statements_for(&self, actor: &Actor) -> GatewayResult<Vec<FinancialStatement>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(GatewayError::new(
                "statements_for",
                "statement store is offline",
            ));
        }

        let statements = self
            .statements
            .read()
            .get(&actor.id())
            .cloned()
            .unwrap_or_default();
        tracing::debug!(actor_id = %actor.id(), count = statements.len(), "Statements retrieved");
        Ok(statements)
    }
}

static_assertions::assert_impl_all!(InMemoryActorDirectory: Send, Sync);
static_assertions::assert_impl_all!(InMemoryStatementStore: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrustLevel;
    use crate::domain::value_objects::{AccountId, Amount, RecordId, StatementPeriod, Timestamp};
    use rstest::rstest;

    fn statement(record: u64, owner: u64) -> FinancialStatement {
        let start = Timestamp::parse("2024-03-01T00:00:00Z").unwrap();
        let end = Timestamp::parse("2024-03-31T00:00:00Z").unwrap();
        FinancialStatement {
            record_id: RecordId::new(record),
            owner_id: ActorId::new(owner),
            account_id: AccountId::new(10),
            amount: Amount::from_minor_units(100),
            created_at: end,
            period: StatementPeriod::new(start, end),
        }
    }

    // =========================================================================
    // InMemoryActorDirectory Tests
    // =========================================================================

    #[rstest]
    fn known_actor_is_found() {
        let actor = Actor::administrator(ActorId::new(2), true);
        let directory = InMemoryActorDirectory::with_actors([actor]);

        assert_eq!(directory.get(ActorId::new(2)), Ok(Some(actor)));
        assert_eq!(directory.len(), 1);
    }

    #[rstest]
    fn unknown_actor_is_absent_not_an_error() {
        let directory = InMemoryActorDirectory::new();

        assert!(directory.is_empty());
        assert_eq!(directory.get(ActorId::new(42)), Ok(None));
    }

    #[rstest]
    fn repeated_id_replaces_previous_actor() {
        let directory = InMemoryActorDirectory::with_actors([
            Actor::standard_user(ActorId::new(1), TrustLevel::PossibleRisk),
            Actor::standard_user(ActorId::new(1), TrustLevel::TrustedOperative),
        ]);

        assert_eq!(
            directory.get(ActorId::new(1)),
            Ok(Some(Actor::standard_user(
                ActorId::new(1),
                TrustLevel::TrustedOperative
            )))
        );
    }

    #[rstest]
    fn offline_directory_fails() {
        let directory = InMemoryActorDirectory::new();
        directory.set_offline(true);

        let error = directory.get(ActorId::new(1)).unwrap_err();
        assert_eq!(error.operation(), "get_actor");

        directory.set_offline(false);
        assert_eq!(directory.get(ActorId::new(1)), Ok(None));
    }

    // =========================================================================
    // InMemoryStatementStore Tests
    // =========================================================================

    #[rstest]
    fn statements_are_served_in_filing_order_without_ownership_checks() {
        let store = InMemoryStatementStore::new();
        store.file(ActorId::new(1), [statement(1, 1), statement(2, 5)]);
        store.file(ActorId::new(1), [statement(3, 1)]);
        let actor = Actor::standard_user(ActorId::new(1), TrustLevel::NonCombatant);

        let records: Vec<u64> = store
            .statements_for(&actor)
            .unwrap()
            .iter()
            .map(|statement| statement.record_id.value())
            .collect();

        assert_eq!(records, vec![1, 2, 3]);
    }

    #[rstest]
    fn actor_without_statements_gets_empty_list() {
        let store = InMemoryStatementStore::new();
        let actor = Actor::administrator(ActorId::new(9), false);

        assert_eq!(store.statements_for(&actor), Ok(Vec::new()));
    }

    #[rstest]
    fn offline_store_fails() {
        let store = InMemoryStatementStore::new();
        store.set_offline(true);
        let actor = Actor::administrator(ActorId::new(9), false);

        assert!(store.statements_for(&actor).is_err());
    }
}
