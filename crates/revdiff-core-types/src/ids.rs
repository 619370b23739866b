//! Entity identifiers
//!
//! Every versioned entity is identified by a BBID, a UUID that is stable
//! across revisions of the entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable unique identifier for a versioned entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bbid(Uuid);

impl Bbid {
    /// Generate a new random BBID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse from the canonical hyphenated string form.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Bbid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Bbid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
