//! Revision, editor and note records.
//!
//! These mirror the persisted revision metadata: who made the change, when,
//! which parent revisions it descends from, and any discussion notes. The
//! diff pipeline attaches formatted per-entity change lists to a revision
//! via [`RevisionDiff`].

use crate::diff::FormattedDiff;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The editor who authored a revision or note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editor {
    pub id: u64,
    pub name: String,
}

/// A discussion note attached to a revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub author: Editor,
    pub content: String,
    pub posted_at: DateTime<Utc>,
}

/// One revision in an entity's history.
///
/// A revision with more than one parent id is a merge revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub id: u64,
    pub author: Editor,
    pub created_at: DateTime<Utc>,
    /// Ids of the parent revisions; empty for an entity's first revision
    #[serde(default)]
    pub parent_ids: Vec<u64>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Revision {
    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() > 1
    }
}

/// A revision together with its display-ready per-entity diffs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionDiff {
    pub revision: Revision,
    pub diffs: Vec<FormattedDiff>,
}
