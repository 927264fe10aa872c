//! Application layer for financial summarization.
//!
//! - **Ports**: Traits for every collaborator the workflow calls
//! - **Validation**: Authorization plus auditing of refused requests
//! - **Workflow**: The linear summarization pipeline and its errors
//!
//! Collaborators are injected as trait objects, so the same workflow runs
//! against in-memory adapters, test doubles or real services.

pub mod errors;
pub mod ports;
pub mod validation;
pub mod workflow;

pub use errors::WorkflowError;
pub use ports::{
    ActorLookup, AuditingGateway, Clock, DeliveryGateway, GatewayError, GatewayResult,
    StatementSource,
};
pub use validation::ValidationService;
pub use workflow::{WorkflowOrchestrator, WorkflowResult, WorkflowStage};
