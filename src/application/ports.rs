//! Collaborator ports used by the summarization workflow.
//!
//! Every external dependency of the workflow is a trait defined here. The
//! workflow only sees these abstractions; concrete adapters live in the
//! infrastructure layer, and tests substitute their own.
//!
//! All calls are synchronous and are attempted exactly once. Implementations
//! must be safe to share between concurrent workflow invocations.

use thiserror::Error;

use crate::domain::value_objects::{ActorId, Timestamp};
use crate::domain::{Actor, FinancialStatement, RequestedMode, SummarizationResult};

// =============================================================================
// GatewayError
// =============================================================================

/// A failure reported by a collaborator.
///
/// # Examples
///
/// ```
/// use financial_summarization::application::GatewayError;
///
/// let error = GatewayError::new("deliver", "mail relay refused connection");
/// assert_eq!(error.operation(), "deliver");
/// assert_eq!(error.to_string(), "deliver failed: mail relay refused connection");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct GatewayError {
    operation: String,
    message: String,
}

impl GatewayError {
    #[must_use]
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

// =============================================================================
// ActorLookup
// =============================================================================

pub trait ActorLookup: Send + Sync {
    /// Looks up the actor with `actor_id`.
    ///
    /// `Ok(None)` means the lookup worked and no such actor exists.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the directory cannot be queried.
    fn get(&self, actor_id: ActorId) -> GatewayResult<Option<Actor>>;
}

// =============================================================================
// StatementSource
// =============================================================================

pub trait StatementSource: Send + Sync {
    /// Statements to summarize for `actor`, unfiltered and unchecked.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the statements cannot be retrieved.
    fn statements_for(&self, actor: &Actor) -> GatewayResult<Vec<FinancialStatement>>;
}

// =============================================================================
// AuditingGateway
// =============================================================================

pub trait AuditingGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the entry could not be written.
    fn record_denied_attempt(&self, actor: &Actor, mode: RequestedMode) -> GatewayResult<()>;

    /// Records a delivered summarization and the window it covered.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the entry could not be written.
    fn record_success(&self, actor_id: ActorId, window_start: Timestamp) -> GatewayResult<()>;
}

// =============================================================================
// DeliveryGateway
// =============================================================================

pub trait DeliveryGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the result did not reach its recipient.
    fn deliver(&self, result: &SummarizationResult) -> GatewayResult<()>;
}

// =============================================================================
// Clock
// =============================================================================

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
