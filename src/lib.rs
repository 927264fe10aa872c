//! # financial-summarization
//!
//! Authorization-gated summarization of financial statements.
//!
//! A request names an actor, an operating mode and a window length in days.
//! The workflow looks the actor up, checks the mode against a fixed rule
//! table (auditing refusals), summarizes the actor's statements whose period
//! starts inside the window, delivers the result and audits the success.
//!
//! ## Layers
//!
//! - [`domain`]: Actors, modes, the authorization rule and the pure
//!   summarization calculation
//! - [`application`]: Collaborator ports, validation and the workflow
//! - [`infrastructure`]: Configuration, fixtures and in-memory adapters
//!
//! ## Example
//!
//! ```rust
//! use financial_summarization::domain::value_objects::ActorId;
//! use financial_summarization::domain::{Actor, RequestedMode, TrustLevel};
//! use financial_summarization::infrastructure::{AppDependencies, Fixture};
//!
//! let fixture = Fixture {
//!     actors: vec![Actor::standard_user(ActorId::new(1), TrustLevel::TrustedOperative)],
//!     ..Fixture::default()
//! };
//! let dependencies = AppDependencies::from_fixture(fixture);
//!
//! let result = dependencies
//!     .orchestrator()
//!     .run(ActorId::new(1), RequestedMode::Mode2, 30)
//!     .unwrap();
//! assert!(result.statements.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod application;
pub mod domain;
pub mod infrastructure;
