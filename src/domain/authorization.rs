//! Authorization rule for requested operating modes.
//!
//! The rule is a pure, total function over every actor variant and every
//! [`RequestedMode`]. Each actor variant has its own policy function; the
//! top-level [`evaluate`] only dispatches on the variant.
//!
//! | Actor                          | Mode1 | Mode2 | Mode3 |
//! |--------------------------------|-------|-------|-------|
//! | Administrator, super admin     | allow | deny  | allow |
//! | Administrator, not super admin | deny  | allow | allow |
//! | User, possible risk            | deny  | deny  | allow |
//! | User, trusted operative        | allow | allow | allow |
//! | User, non-combatant            | allow | deny  | allow |
//!
//! `Mode3` is allowed for everyone.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::actor::{Actor, Administrator, StandardUser, TrustLevel};
use super::mode::RequestedMode;

/// Decides whether `actor` may proceed in `mode`.
///
/// # Examples
///
/// ```rust
/// use financial_summarization::domain::{Actor, RequestedMode, evaluate};
/// use financial_summarization::domain::value_objects::ActorId;
///
/// let administrator = Actor::administrator(ActorId::new(2), false);
/// assert!(!evaluate(&administrator, RequestedMode::Mode1));
/// assert!(evaluate(&administrator, RequestedMode::Mode2));
/// ```
#[must_use]
pub const fn evaluate(actor: &Actor, mode: RequestedMode) -> bool {
    match actor {
        Actor::Administrator(administrator) => administrator_allows(administrator, mode),
        Actor::StandardUser(user) => standard_user_allows(user, mode),
    }
}

const fn administrator_allows(administrator: &Administrator, mode: RequestedMode) -> bool {
    match mode {
        RequestedMode::Mode1 => administrator.is_super_admin,
        RequestedMode::Mode2 => !administrator.is_super_admin,
        RequestedMode::Mode3 => true,
    }
}

const fn standard_user_allows(user: &StandardUser, mode: RequestedMode) -> bool {
    match (user.trust_level, mode) {
        (_, RequestedMode::Mode3)
        | (TrustLevel::TrustedOperative, _)
        | (TrustLevel::NonCombatant, RequestedMode::Mode1) => true,
        (TrustLevel::PossibleRisk, _) | (TrustLevel::NonCombatant, RequestedMode::Mode2) => false,
    }
}

/// Details of a refused request.
///
/// `audit_recording_failed` reports whether writing the denial to the audit
/// trail failed as well. It never changes the fact that the request was
/// denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorizationDenial {
    pub actor: Actor,
    pub mode: RequestedMode,
    pub audit_recording_failed: bool,
}

impl AuthorizationDenial {
    /// Folds the outcome of the denial audit write into the denial.
    ///
    /// Only success or failure of the write is kept; its error value is
    /// dropped here.
    #[must_use]
    pub const fn new<E>(actor: Actor, mode: RequestedMode, audit: &Result<(), E>) -> Self {
        Self {
            actor,
            mode,
            audit_recording_failed: audit.is_err(),
        }
    }
}

impl fmt::Display for AuthorizationDenial {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} may not operate in {}", self.actor, self.mode)?;
        if self.audit_recording_failed {
            formatter.write_str(" (denial could not be audited)")?;
        }
        Ok(())
    }
}

/// Result of validating an actor against a requested mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorizationOutcome {
    Allowed,
    Denied(AuthorizationDenial),
}

impl AuthorizationOutcome {
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Converts the outcome into a `Result`, with the denial as the error.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthorizationDenial`] when the outcome is `Denied`.
    pub const fn into_result(self) -> Result<(), AuthorizationDenial> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied(denial) => Err(denial),
        }
    }
}
