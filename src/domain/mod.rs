//! Domain layer for financial summarization.
//!
//! The domain layer holds the rules and is independent of every collaborator
//! the workflow talks to.
//!
//! # Structure
//!
//! - [`value_objects`] - Identifiers, amounts, timestamps and periods
//! - [`actor`] - Administrators and standard users
//! - [`mode`] - Requested operating modes
//! - [`authorization`] - The actor/mode authorization rule
//! - [`statement`] - Financial statements
//! - [`summarization`] - Statement validation and window filtering
//!
//! # Design Principles
//!
//! - **Pure functions**: No I/O; time is passed in, never read
//! - **Closed variants**: Actors and errors are enums matched exhaustively
//! - **Immutability**: Everything is constructed per request and never mutated

pub mod actor;
pub mod authorization;
pub mod mode;
pub mod statement;
pub mod summarization;
pub mod value_objects;

pub use actor::{Actor, Administrator, StandardUser, TrustLevel};
pub use authorization::{AuthorizationDenial, AuthorizationOutcome, evaluate};
pub use mode::{ParseModeError, RequestedMode};
pub use statement::FinancialStatement;
pub use summarization::{DataError, SummarizationResult, summarize};
