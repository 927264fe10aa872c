//! Infrastructure layer for financial summarization.
//!
//! - **Configuration**: Settings loaded from environment variables
//! - **Adapters**: In-memory implementations of every workflow port
//! - **Fixtures**: JSON files seeding those adapters
//! - **Dependencies**: Wiring of adapters into a [`WorkflowOrchestrator`]
//!
//! [`WorkflowOrchestrator`]: crate::application::WorkflowOrchestrator

mod auditing;
mod clock;
mod config;
mod delivery;
mod dependencies;
mod directory;
mod fixture;

pub use auditing::{AuditAction, AuditEntry, RecordingAuditor};
pub use clock::{FixedClock, SystemClock};
pub use config::{AppConfig, ConfigError, FIXTURE_KEY, LOG_FILTER_KEY, MAX_DAYS_KEY};
pub use delivery::TracingDelivery;
pub use dependencies::AppDependencies;
pub use directory::{InMemoryActorDirectory, InMemoryStatementStore};
pub use fixture::{Fixture, FixtureError, StatementBatch};
