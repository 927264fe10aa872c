//! JSON fixtures seeding the in-memory adapters.
//!
//! A fixture lists actors and, per actor, the statements the statement store
//! serves for them. It may pin the current time so that a demo stays
//! reproducible:
//!
//! ```json
//! {
//!   "now": "2024-03-10T12:00:00Z",
//!   "actors": [{ "kind": "administrator", "id": 2, "is_super_admin": true }],
//!   "statements": [{ "actor_id": 2, "statements": [] }]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::value_objects::{ActorId, Timestamp};
use crate::domain::{Actor, FinancialStatement};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read fixture {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fixture {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Statements the store serves for one actor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatementBatch {
    pub actor_id: ActorId,
    pub statements: Vec<FinancialStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Fixture {
    /// Pinned current time. The system clock is used when absent.
    #[serde(default)]
    pub now: Option<Timestamp>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub statements: Vec<StatementBatch>,
}

impl Fixture {
    /// Reads and parses the fixture at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] if the file cannot be read and
    /// [`FixtureError::Parse`] if it is not a valid fixture.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let fixture: Self =
            serde_json::from_str(&contents).map_err(|source| FixtureError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            actors = fixture.actors.len(),
            batches = fixture.statements.len(),
            "Fixture loaded"
        );
        Ok(fixture)
    }
}
