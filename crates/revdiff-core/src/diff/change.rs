//! Diff model types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Change kinds serialize as the single-letter wire codes (`N`/`E`/`D`)
//! produced by the upstream structural diff, and old/new values as
//! `lhs`/`rhs`, so diffs computed elsewhere deserialize directly.

use revdiff_core_types::{Bbid, EntityType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One segment of a change path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl PathSegment {
    /// The key name, if this segment addresses an object member.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(k) => Some(k.as_str()),
            PathSegment::Index(_) => None,
        }
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "{}", k),
            PathSegment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Build a path of object keys.
pub fn key_path(keys: &[&str]) -> Vec<PathSegment> {
    keys.iter()
        .map(|k| PathSegment::Key((*k).to_string()))
        .collect()
}

/// The kind of a field-level delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Field is new in the current snapshot
    #[serde(rename = "N")]
    Added,
    /// Field exists in both snapshots with different values
    #[serde(rename = "E")]
    Edited,
    /// Field is gone from the current snapshot
    #[serde(rename = "D")]
    Deleted,
}

/// A single field-level delta between two entity snapshots.
///
/// Invariant (enforced by [`crate::diff::classifier::validate`]): `Edited`
/// carries both values, `Added` only the new value, `Deleted` only the old.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    /// Ordered segments identifying the changed field
    pub path: Vec<PathSegment>,
    pub kind: ChangeKind,
    /// Value in the parent snapshot
    #[serde(rename = "lhs", default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    /// Value in the current snapshot
    #[serde(rename = "rhs", default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl Change {
    pub fn added(path: Vec<PathSegment>, new_value: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Added,
            old_value: None,
            new_value: Some(new_value),
        }
    }

    pub fn edited(path: Vec<PathSegment>, old_value: Value, new_value: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Edited,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    pub fn deleted(path: Vec<PathSegment>, old_value: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Deleted,
            old_value: Some(old_value),
            new_value: None,
        }
    }

    /// Dotted display form of the path, e.g. `aliasSet.aliases.2.name`.
    pub fn path_display(&self) -> String {
        self.path
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// The full set of changes between a revision and its parent for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRevisionDiff {
    pub entity_type: EntityType,
    pub entity_id: Bbid,
    /// Changes in upstream diff order
    pub changes: Vec<Change>,
}

/// Visual weight of a formatted change, derived from its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Created,
    Edited,
    Deleted,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Created => "created",
            Severity::Edited => "edited",
            Severity::Deleted => "deleted",
        }
    }
}

impl From<ChangeKind> for Severity {
    fn from(kind: ChangeKind) -> Self {
        match kind {
            ChangeKind::Added => Severity::Created,
            ChangeKind::Edited => Severity::Edited,
            ChangeKind::Deleted => Severity::Deleted,
        }
    }
}

/// A display-ready change: label plus rendered old/new value lines.
///
/// Values are lists so that set-valued and list-valued fields render one
/// line per member; an empty list displays as an em-dash placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedChange {
    pub label: String,
    pub old: Vec<String>,
    pub new: Vec<String>,
    pub severity: Severity,
}

/// All display-ready changes for one entity within a revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedDiff {
    pub entity_type: EntityType,
    pub entity_id: Bbid,
    pub changes: Vec<FormattedChange>,
}
