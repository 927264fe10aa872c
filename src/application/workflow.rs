//! Summarization workflow.
//!
//! [`WorkflowOrchestrator::run`] is a linear pipeline:
//!
//! ```text
//! FetchingActor → Authorizing → Summarizing → Delivering → RecordingSuccess → Done
//! ```
//!
//! Any step may fail, which ends the request with a [`WorkflowError`]. Every
//! collaborator is called at most once and nothing is retried. Success is
//! audited only after the result has been delivered.

use std::fmt;
use std::sync::Arc;

use crate::application::errors::WorkflowError;
use crate::application::ports::{
    ActorLookup, AuditingGateway, Clock, DeliveryGateway, StatementSource,
};
use crate::application::validation::ValidationService;
use crate::domain::value_objects::ActorId;
use crate::domain::{Actor, DataError, RequestedMode, SummarizationResult, summarize};

pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Stages of a workflow run, in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowStage {
    FetchingActor,
    Authorizing,
    Summarizing,
    Delivering,
    RecordingSuccess,
    Done,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FetchingActor => "fetching actor",
            Self::Authorizing => "authorizing",
            Self::Summarizing => "summarizing",
            Self::Delivering => "delivering",
            Self::RecordingSuccess => "recording success",
            Self::Done => "done",
        };
        formatter.write_str(label)
    }
}

// =============================================================================
// WorkflowOrchestrator
// =============================================================================

/// Runs the summarization workflow against a set of collaborators.
///
/// The orchestrator holds no per-request state, so one instance may serve
/// concurrent requests as long as the collaborators allow it.
#[derive(Clone)]
pub struct WorkflowOrchestrator {
    actors: Arc<dyn ActorLookup>,
    statements: Arc<dyn StatementSource>,
    auditing: Arc<dyn AuditingGateway>,
    delivery: Arc<dyn DeliveryGateway>,
    clock: Arc<dyn Clock>,
    validation: ValidationService,
}

impl WorkflowOrchestrator {
    #[must_use]
    pub fn new(
        actors: Arc<dyn ActorLookup>,
        statements: Arc<dyn StatementSource>,
        auditing: Arc<dyn AuditingGateway>,
        delivery: Arc<dyn DeliveryGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let validation = ValidationService::new(Arc::clone(&auditing));
        Self {
            actors,
            statements,
            auditing,
            delivery,
            clock,
            validation,
        }
    }

    /// Summarizes the last `max_days_to_process` days of statements for
    /// `actor_id` in `mode`, delivers the result and records the success.
    ///
    /// # Errors
    ///
    /// - [`WorkflowError::ActorLookupFailed`] if the actor lookup fails
    /// - [`WorkflowError::ActorNotFound`] if no actor has `actor_id`
    /// - [`WorkflowError::AuthorizationFailed`] if the actor may not use `mode`
    /// - [`WorkflowError::SummarizationFailed`] if the statements cannot be
    ///   retrieved or are inconsistent
    /// - [`WorkflowError::DeliveryFailed`] if delivery, or recording its
    ///   success, fails. The computed result is discarded in that case.
    pub fn run(
        &self,
        actor_id: ActorId,
        mode: RequestedMode,
        max_days_to_process: u32,
    ) -> WorkflowResult<SummarizationResult> {
        let outcome = self
            .fetch_actor(actor_id)
            .and_then(|actor| self.authorize(actor, mode))
            .and_then(|actor| self.summarize(actor, max_days_to_process))
            .and_then(|result| self.deliver(result))
            .and_then(|result| self.record_success(result));

        match &outcome {
            Ok(result) => tracing::info!(
                %actor_id,
                %mode,
                retained = result.statements.len(),
                stage = %WorkflowStage::Done,
                "Summarization delivered"
            ),
            Err(error) => tracing::warn!(
                %actor_id,
                %mode,
                stage = %error.stage(),
                "Summarization failed: {}",
                error
            ),
        }

        outcome
    }

    // =========================================================================
    // Step 1: Fetch Actor [IO]
    // =========================================================================

    fn fetch_actor(&self, actor_id: ActorId) -> WorkflowResult<Actor> {
        tracing::debug!(%actor_id, stage = %WorkflowStage::FetchingActor);

        self.actors
            .get(actor_id)
            .map_err(|cause| WorkflowError::ActorLookupFailed { actor_id, cause })?
            .ok_or(WorkflowError::ActorNotFound { actor_id })
    }

    // =========================================================================
    // Step 2: Authorize [Pure + denial audit]
    // =========================================================================

    fn authorize(&self, actor: Actor, mode: RequestedMode) -> WorkflowResult<Actor> {
        tracing::debug!(actor_id = %actor.id(), %mode, stage = %WorkflowStage::Authorizing);

        self.validation
            .validate(&actor, mode)
            .into_result()
            .map(|()| actor)
            .map_err(|cause| WorkflowError::AuthorizationFailed { actor, mode, cause })
    }

    // =========================================================================
    // Step 3: Summarize [IO + Pure]
    // =========================================================================

    fn summarize(
        &self,
        actor: Actor,
        max_days_to_process: u32,
    ) -> WorkflowResult<SummarizationResult> {
        tracing::debug!(actor_id = %actor.id(), stage = %WorkflowStage::Summarizing);

        let statements = self.statements.statements_for(&actor).map_err(|error| {
            WorkflowError::SummarizationFailed {
                actor,
                cause: DataError::StatementsUnavailable {
                    actor_id: actor.id(),
                    reason: error.to_string(),
                },
            }
        })?;

        summarize(&actor, statements, max_days_to_process, self.clock.now())
            .map_err(|cause| WorkflowError::SummarizationFailed { actor, cause })
    }

    // =========================================================================
    // Step 4: Deliver [IO]
    // =========================================================================

    fn deliver(&self, result: SummarizationResult) -> WorkflowResult<SummarizationResult> {
        tracing::debug!(actor_id = %result.actor.id(), stage = %WorkflowStage::Delivering);

        self.delivery
            .deliver(&result)
            .map_err(|cause| WorkflowError::DeliveryFailed {
                actor: result.actor,
                cause,
            })?;

        Ok(result)
    }

    // =========================================================================
    // Step 5: Record Success [IO]
    // =========================================================================

    fn record_success(&self, result: SummarizationResult) -> WorkflowResult<SummarizationResult> {
        tracing::debug!(actor_id = %result.actor.id(), stage = %WorkflowStage::RecordingSuccess);

        self.auditing
            .record_success(result.actor.id(), result.window_start)
            .map_err(|cause| WorkflowError::DeliveryFailed {
                actor: result.actor,
                cause,
            })?;

        Ok(result)
    }
}

impl fmt::Debug for WorkflowOrchestrator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WorkflowOrchestrator")
            .field("actors", &"<dyn ActorLookup>")
            .field("statements", &"<dyn StatementSource>")
            .field("auditing", &"<dyn AuditingGateway>")
            .field("delivery", &"<dyn DeliveryGateway>")
            .field("clock", &"<dyn Clock>")
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(WorkflowOrchestrator: Send, Sync);
