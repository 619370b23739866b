//! Change classification guard.
//!
//! Changes arrive already classified by the upstream structural diff; this
//! guard only checks that the kind is consistent with which values are
//! present. Every formatter runs behind it, so a malformed change can be
//! skipped individually instead of blanking the whole revision.

use crate::diff::change::{Change, ChangeKind};
use crate::errors::DiffError;

/// Validate the kind/value-presence invariant of a change.
///
/// Returns the kind unchanged on success.
///
/// # Errors
///
/// `DiffError::MalformedChange` when:
/// - kind is `Edited` but either value is absent
/// - kind is `Added` but an old value is present or the new value is absent
/// - kind is `Deleted` but a new value is present or the old value is absent
pub fn validate(change: &Change) -> Result<ChangeKind, DiffError> {
    let malformed = |reason: &str| DiffError::MalformedChange {
        path: change.path_display(),
        reason: reason.to_string(),
    };

    match change.kind {
        ChangeKind::Added => {
            if change.old_value.is_some() {
                return Err(malformed("kind N must not carry an old value"));
            }
            if change.new_value.is_none() {
                return Err(malformed("kind N requires a new value"));
            }
        }
        ChangeKind::Deleted => {
            if change.new_value.is_some() {
                return Err(malformed("kind D must not carry a new value"));
            }
            if change.old_value.is_none() {
                return Err(malformed("kind D requires an old value"));
            }
        }
        ChangeKind::Edited => {
            if change.old_value.is_none() || change.new_value.is_none() {
                return Err(malformed("kind E requires both values"));
            }
        }
    }
    Ok(change.kind)
}
