//! Dependency container wiring the in-memory adapters into a workflow.
//!
//! # Example
//!
//! ```rust
//! use financial_summarization::domain::RequestedMode;
//! use financial_summarization::domain::value_objects::ActorId;
//! use financial_summarization::infrastructure::{AppDependencies, Fixture};
//!
//! let dependencies = AppDependencies::from_fixture(Fixture::default());
//! let error = dependencies
//!     .orchestrator()
//!     .run(ActorId::new(1), RequestedMode::Mode3, 30)
//!     .unwrap_err();
//! assert!(error.is_not_found());
//! ```

use std::sync::Arc;

use crate::application::{Clock, WorkflowOrchestrator};

use super::auditing::RecordingAuditor;
use super::clock::{FixedClock, SystemClock};
use super::delivery::TracingDelivery;
use super::directory::{InMemoryActorDirectory, InMemoryStatementStore};
use super::fixture::Fixture;

/// In-memory collaborators plus the orchestrator built on them.
///
/// The concrete adapters stay reachable so callers can inspect the audit
/// trail and deliveries, or switch collaborators into failure modes.
#[derive(Clone)]
pub struct AppDependencies {
    actors: Arc<InMemoryActorDirectory>,
    statements: Arc<InMemoryStatementStore>,
    auditor: Arc<RecordingAuditor>,
    delivery: Arc<TracingDelivery>,
    orchestrator: WorkflowOrchestrator,
}

impl AppDependencies {
    /// Seeds fresh adapters from `fixture`. The clock is pinned when the
    /// fixture says so and follows the system time otherwise.
    #[must_use]
    pub fn from_fixture(fixture: Fixture) -> Self {
        let clock: Arc<dyn Clock> = match fixture.now {
            Some(instant) => Arc::new(FixedClock::new(instant)),
            None => Arc::new(SystemClock::new()),
        };

        let actors = Arc::new(InMemoryActorDirectory::with_actors(fixture.actors));
        let statements = Arc::new(InMemoryStatementStore::new());
        for batch in fixture.statements {
            statements.file(batch.actor_id, batch.statements);
        }
        let auditor = Arc::new(RecordingAuditor::new(Arc::clone(&clock)));
        let delivery = Arc::new(TracingDelivery::new());

        let orchestrator = WorkflowOrchestrator::new(
            actors.clone(),
            statements.clone(),
            auditor.clone(),
            delivery.clone(),
            clock,
        );

        Self {
            actors,
            statements,
            auditor,
            delivery,
            orchestrator,
        }
    }

    #[must_use]
    pub const fn orchestrator(&self) -> &WorkflowOrchestrator {
        &self.orchestrator
    }

    #[must_use]
    pub const fn actors(&self) -> &Arc<InMemoryActorDirectory> {
        &self.actors
    }

    #[must_use]
    pub const fn statements(&self) -> &Arc<InMemoryStatementStore> {
        &self.statements
    }

    #[must_use]
    pub const fn auditor(&self) -> &Arc<RecordingAuditor> {
        &self.auditor
    }

    #[must_use]
    pub const fn delivery(&self) -> &Arc<TracingDelivery> {
        &self.delivery
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("actors", &self.actors.len())
            .field("auditor", &self.auditor)
            .field("delivery", &self.delivery)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(AppDependencies: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ActorId, Timestamp};
    use crate::domain::{Actor, RequestedMode};
    use crate::infrastructure::AuditAction;
    use rstest::rstest;

    #[rstest]
    fn pinned_clock_drives_window_and_audit_time() {
        let now = Timestamp::parse("2024-03-10T12:00:00Z").unwrap();
        let dependencies = AppDependencies::from_fixture(Fixture {
            now: Some(now),
            actors: vec![Actor::administrator(ActorId::new(2), true)],
            statements: Vec::new(),
        });

        let result = dependencies
            .orchestrator()
            .run(ActorId::new(2), RequestedMode::Mode1, 30)
            .unwrap();

        let expected_start = Timestamp::parse("2024-02-09T12:00:00Z").unwrap();
        assert_eq!(result.window_start, expected_start);
        assert_eq!(dependencies.delivery().delivered(), vec![result]);

        let entries = dependencies.auditor().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].recorded_at, now);
        assert_eq!(
            entries[0].action,
            AuditAction::Succeeded {
                actor_id: ActorId::new(2),
                window_start: expected_start,
            }
        );
    }
}
