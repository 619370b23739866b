//! Revision diff formatting core
//!
//! This crate turns structural diffs between two immutable entity snapshots
//! into human-readable change lists, and reconciles conflicting field values
//! when several entities are merged into one. It provides:
//!
//! - A deterministic snapshot diff engine producing field-level [`diff::Change`]s
//! - A change classifier enforcing the kind/value-presence invariant
//! - Per-entity-type field formatters over a closed set of known paths
//! - An aggregator grouping formatted changes by owning entity
//! - Merge-field candidate collection, selection state and validation
//! - Extended ISO 8601-2004 date display transforms
//! - A plain-text summary renderer for a whole revision
//!
//! All diff artifacts are computed per call and never persisted.

pub mod dates;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod merge;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use diff::{Change, ChangeKind, EntityRevisionDiff, FormattedChange, FormattedDiff, Severity};
pub use errors::{DiffError, Result};
pub use model::{Editor, Note, Revision, RevisionDiff};
