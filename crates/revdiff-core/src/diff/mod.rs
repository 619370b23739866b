//! Revision diff pipeline.
//!
//! Data flows one way through this module: raw structural diff
//! ([`engine::compute_changes`]) → classified change ([`classifier::validate`])
//! → formatted change or silent drop ([`fields`], [`sets`]) → per-entity diff
//! list ([`aggregator`]). Every artifact is request-scoped and ephemeral.

pub mod aggregator;
pub mod change;
pub mod classifier;
pub mod engine;
pub mod fields;
pub mod sets;

pub use aggregator::{format_entity_diffs, format_revision, DiffStats};
pub use change::{
    Change, ChangeKind, EntityRevisionDiff, FormattedChange, FormattedDiff, PathSegment, Severity,
};

use serde_json::Value;

/// Render a leaf JSON value as display text.
///
/// Strings render without quotes; everything else uses its JSON form.
/// Nulls render as the empty string.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
