//! Error types for the summarization workflow.
//!
//! # Error Categories
//!
//! - [`WorkflowError::ActorLookupFailed`]: The actor directory could not be queried
//! - [`WorkflowError::ActorNotFound`]: The directory answered, but has no such actor
//! - [`WorkflowError::AuthorizationFailed`]: The actor may not use the requested mode
//! - [`WorkflowError::SummarizationFailed`]: The actor's statements are inconsistent
//! - [`WorkflowError::DeliveryFailed`]: Delivering, or auditing the delivery, failed
//!
//! Each variant carries the identifiers needed to log or render it without
//! going back to the collaborators.

use thiserror::Error;

use crate::application::ports::GatewayError;
use crate::application::workflow::WorkflowStage;
use crate::domain::value_objects::ActorId;
use crate::domain::{Actor, AuthorizationDenial, DataError, RequestedMode};

// =============================================================================
// WorkflowError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("looking up actor {actor_id} failed")]
    ActorLookupFailed {
        actor_id: ActorId,
        #[source]
        cause: GatewayError,
    },

    #[error("actor {actor_id} does not exist")]
    ActorNotFound { actor_id: ActorId },

    #[error("authorization refused: {cause}")]
    AuthorizationFailed {
        actor: Actor,
        mode: RequestedMode,
        cause: AuthorizationDenial,
    },

    #[error("summarization for {actor} failed")]
    SummarizationFailed {
        actor: Actor,
        #[source]
        cause: DataError,
    },

    #[error("delivery for {actor} failed")]
    DeliveryFailed {
        actor: Actor,
        #[source]
        cause: GatewayError,
    },
}

impl WorkflowError {
    /// The stage the workflow was in when it failed.
    ///
    /// A failure to record success is folded into delivery and reports
    /// [`WorkflowStage::Delivering`].
    #[must_use]
    pub const fn stage(&self) -> WorkflowStage {
        match self {
            Self::ActorLookupFailed { .. } | Self::ActorNotFound { .. } => {
                WorkflowStage::FetchingActor
            }
            Self::AuthorizationFailed { .. } => WorkflowStage::Authorizing,
            Self::SummarizationFailed { .. } => WorkflowStage::Summarizing,
            Self::DeliveryFailed { .. } => WorkflowStage::Delivering,
        }
    }

    /// The actor the workflow resolved before failing, if it got that far.
    #[must_use]
    pub const fn actor(&self) -> Option<&Actor> {
        match self {
            Self::ActorLookupFailed { .. } | Self::ActorNotFound { .. } => None,
            Self::AuthorizationFailed { actor, .. }
            | Self::SummarizationFailed { actor, .. }
            | Self::DeliveryFailed { actor, .. } => Some(actor),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ActorNotFound { .. })
    }

    #[must_use]
    pub const fn is_authorization_failed(&self) -> bool {
        matches!(self, Self::AuthorizationFailed { .. })
    }

    #[must_use]
    pub const fn is_delivery_failed(&self) -> bool {
        matches!(self, Self::DeliveryFailed { .. })
    }
}
