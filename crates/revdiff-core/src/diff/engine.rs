//! Structural snapshot diff engine.
//!
//! The entry point is [`compute_changes`], which walks two entity snapshot
//! documents and produces the ordered field-level [`Change`] list consumed
//! by the formatters. Object keys are visited in sorted order and array
//! elements by index, so the same pair of snapshots always yields the same
//! change sequence.

use crate::diff::change::{Change, PathSegment};
use crate::errors::DiffError;
use serde_json::Value;
use std::collections::BTreeSet;

/// Compute the ordered change list between two snapshot documents.
///
/// A subtree that exists on only one side produces a single change at the
/// subtree root carrying the whole value, matching the upstream deep-diff
/// behaviour. Changes produced here always satisfy the classifier invariant
/// by construction.
///
/// # Errors
///
/// `DiffError::InvalidSnapshot` when either root is not a JSON object.
pub fn compute_changes(old: &Value, new: &Value) -> Result<Vec<Change>, DiffError> {
    if !old.is_object() {
        return Err(DiffError::InvalidSnapshot {
            message: "parent snapshot root must be a JSON object".to_string(),
        });
    }
    if !new.is_object() {
        return Err(DiffError::InvalidSnapshot {
            message: "current snapshot root must be a JSON object".to_string(),
        });
    }

    let mut changes = Vec::new();
    let mut path = Vec::new();
    walk(&mut path, Some(old), Some(new), &mut changes);
    Ok(changes)
}

fn walk(
    path: &mut Vec<PathSegment>,
    old: Option<&Value>,
    new: Option<&Value>,
    out: &mut Vec<Change>,
) {
    match (old, new) {
        (Some(o), Some(n)) => {
            if o == n {
                return;
            }
            match (o, n) {
                (Value::Object(o_map), Value::Object(n_map)) => {
                    let keys: BTreeSet<&String> = o_map.keys().chain(n_map.keys()).collect();
                    for key in keys {
                        path.push(PathSegment::Key(key.clone()));
                        walk(path, o_map.get(key.as_str()), n_map.get(key.as_str()), out);
                        path.pop();
                    }
                }
                (Value::Array(o_items), Value::Array(n_items)) => {
                    let len = o_items.len().max(n_items.len());
                    for index in 0..len {
                        path.push(PathSegment::Index(index));
                        walk(path, o_items.get(index), n_items.get(index), out);
                        path.pop();
                    }
                }
                _ => out.push(Change::edited(path.clone(), o.clone(), n.clone())),
            }
        }
        (Some(o), None) => out.push(Change::deleted(path.clone(), o.clone())),
        (None, Some(n)) => out.push(Change::added(path.clone(), n.clone())),
        (None, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::change::{key_path, ChangeKind};
    use crate::diff::classifier;
    use serde_json::json;

    #[test]
    fn test_identical_snapshots_produce_no_changes() {
        let snapshot = json!({"pages": 200, "aliasSet": {"aliases": []}});
        assert!(compute_changes(&snapshot, &snapshot).unwrap().is_empty());
    }

    #[test]
    fn test_scalar_edit() {
        let old = json!({"pages": 200});
        let new = json!({"pages": 210});
        let changes = compute_changes(&old, &new).unwrap();
        assert_eq!(
            changes,
            vec![Change::edited(key_path(&["pages"]), json!(200), json!(210))]
        );
    }

    #[test]
    fn test_added_subtree_is_a_single_change() {
        let old = json!({});
        let new = json!({"beginArea": {"id": 7, "name": "Berlin"}});
        let changes = compute_changes(&old, &new).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::Added);
        assert_eq!(changes[0].path, key_path(&["beginArea"]));
        assert_eq!(changes[0].new_value, Some(json!({"id": 7, "name": "Berlin"})));
    }

    #[test]
    fn test_nested_edit_has_full_path() {
        let old = json!({"beginArea": {"id": 7, "name": "Berlin"}});
        let new = json!({"beginArea": {"id": 7, "name": "Hamburg"}});
        let changes = compute_changes(&old, &new).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].path_display(), "beginArea.name");
    }

    #[test]
    fn test_array_element_paths_use_indices() {
        let old = json!({"aliasSet": {"aliases": [{"name": "A"}, {"name": "B"}]}});
        let new = json!({"aliasSet": {"aliases": [{"name": "A"}, {"name": "C"}, {"name": "D"}]}});
        let changes = compute_changes(&old, &new).unwrap();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].path_display(), "aliasSet.aliases.1.name");
        assert_eq!(changes[0].kind, ChangeKind::Edited);
        assert_eq!(changes[1].path_display(), "aliasSet.aliases.2");
        assert_eq!(changes[1].kind, ChangeKind::Added);
    }

    #[test]
    fn test_type_change_is_an_edit_at_the_node() {
        let old = json!({"ended": false});
        let new = json!({"ended": "1999"});
        let changes = compute_changes(&old, &new).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::Edited);
    }

    #[test]
    fn test_non_object_root_rejected() {
        let err = compute_changes(&json!([1, 2]), &json!({})).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_SNAPSHOT");
        let err = compute_changes(&json!({}), &json!("x")).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_SNAPSHOT");
    }

    #[test]
    fn test_output_is_deterministic() {
        let old = json!({"b": 1, "a": 1, "c": {"y": 1, "x": 1}});
        let new = json!({"b": 2, "a": 2, "c": {"y": 2, "x": 2}});
        let first = compute_changes(&old, &new).unwrap();
        let second = compute_changes(&old, &new).unwrap();
        assert_eq!(first, second);
        let paths: Vec<String> = first.iter().map(Change::path_display).collect();
        assert_eq!(paths, vec!["a", "b", "c.x", "c.y"]);
    }

    #[test]
    fn test_every_change_satisfies_classifier() {
        let old = json!({"gone": 1, "edited": {"deep": [1, 2, 3]}});
        let new = json!({"added": true, "edited": {"deep": [1, 9]}});
        for change in compute_changes(&old, &new).unwrap() {
            classifier::validate(&change).unwrap();
        }
    }
}
