//! Actors on whose behalf a summarization is requested.
//!
//! An [`Actor`] is either an [`Administrator`] or a [`StandardUser`]. The
//! variant is fixed when the actor is constructed; nothing in the domain
//! promotes or demotes an actor.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value_objects::ActorId;

/// How far a standard user is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    /// The user has been flagged as a possible risk.
    PossibleRisk,
    /// The user is trusted with every operating mode.
    TrustedOperative,
    /// The user takes no part in sensitive operations.
    NonCombatant,
}

impl TrustLevel {
    /// All trust levels, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::PossibleRisk,
        Self::TrustedOperative,
        Self::NonCombatant,
    ];
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PossibleRisk => "possible risk",
            Self::TrustedOperative => "trusted operative",
            Self::NonCombatant => "non-combatant",
        };
        formatter.write_str(label)
    }
}

/// An administrator account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Administrator {
    pub id: ActorId,
    pub is_super_admin: bool,
}

/// A regular user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandardUser {
    pub id: ActorId,
    pub trust_level: TrustLevel,
}

/// The authenticated entity a workflow runs for.
///
/// # Examples
///
/// ```rust
/// use financial_summarization::domain::{Actor, TrustLevel};
/// use financial_summarization::domain::value_objects::ActorId;
///
/// let actor = Actor::standard_user(ActorId::new(1), TrustLevel::NonCombatant);
/// assert_eq!(actor.id(), ActorId::new(1));
/// assert!(!actor.is_administrator());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    Administrator(Administrator),
    StandardUser(StandardUser),
}

impl Actor {
    #[must_use]
    pub const fn administrator(id: ActorId, is_super_admin: bool) -> Self {
        Self::Administrator(Administrator { id, is_super_admin })
    }

    #[must_use]
    pub const fn standard_user(id: ActorId, trust_level: TrustLevel) -> Self {
        Self::StandardUser(StandardUser { id, trust_level })
    }

    /// Returns the identity shared by both variants.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        match self {
            Self::Administrator(administrator) => administrator.id,
            Self::StandardUser(user) => user.id,
        }
    }

    #[must_use]
    pub const fn is_administrator(&self) -> bool {
        matches!(self, Self::Administrator(_))
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Administrator(administrator) if administrator.is_super_admin => {
                write!(formatter, "super administrator {}", administrator.id)
            }
            Self::Administrator(administrator) => {
                write!(formatter, "administrator {}", administrator.id)
            }
            Self::StandardUser(user) => {
                write!(formatter, "user {} ({})", user.id, user.trust_level)
            }
        }
    }
}
