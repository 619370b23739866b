//! Entity kinds
//!
//! The closed set of entity types that carry revisions. A single revision id
//! may be shared by revisions of several types when the revision is a
//! cross-entity merge, so page-level assembly always iterates
//! [`EntityType::ALL`] in its fixed display order.

use serde::{Deserialize, Serialize};

/// The kind of a versioned entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Author,
    Edition,
    EditionGroup,
    Publisher,
    Work,
}

impl EntityType {
    /// All entity types in canonical display order.
    pub const ALL: [EntityType; 5] = [
        EntityType::Author,
        EntityType::Edition,
        EntityType::EditionGroup,
        EntityType::Publisher,
        EntityType::Work,
    ];

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Author => "Author",
            EntityType::Edition => "Edition",
            EntityType::EditionGroup => "EditionGroup",
            EntityType::Publisher => "Publisher",
            EntityType::Work => "Work",
        }
    }

    /// Parse from the canonical display name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Author" => Some(EntityType::Author),
            "Edition" => Some(EntityType::Edition),
            "EditionGroup" => Some(EntityType::EditionGroup),
            "Publisher" => Some(EntityType::Publisher),
            "Work" => Some(EntityType::Work),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
