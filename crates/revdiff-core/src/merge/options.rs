//! Candidate value collection for merge fields.
//!
//! Each builder walks the merging entities' snapshots in order, collects the
//! distinct values one field can take, and defaults the selection to the
//! first (target) entity's value. Dedup keys are chosen per field: type and
//! area by their `id`, dates by the raw stored string, ended by the flag
//! itself. Absent and null values never become options.

use crate::dates::transform_iso_date_for_select;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One candidate value an editor can pick for a merged field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeOption {
    pub label: String,
    pub value: Value,
}

/// A merged field: its candidate values and the currently selected one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeField {
    pub label: String,
    pub options: Vec<MergeOption>,
    pub selection: Option<Value>,
}

fn merge_field(label: &str, options: Vec<MergeOption>, target_value: Option<Value>) -> MergeField {
    let selection = target_value.or_else(|| options.first().map(|o| o.value.clone()));
    MergeField {
        label: label.to_string(),
        options,
        selection,
    }
}

fn push_unique(options: &mut Vec<MergeOption>, seen: &mut Vec<Value>, key: Value, option: MergeOption) {
    if !seen.contains(&key) {
        seen.push(key);
        options.push(option);
    }
}

fn non_null(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}

/// Candidate entity types, deduplicated by type id.
pub fn type_field(label: &str, entities: &[Value]) -> MergeField {
    let mut options = Vec::new();
    let mut seen = Vec::new();
    for entity in entities {
        let Some(type_ref) = non_null(entity.get("type")) else {
            continue;
        };
        let Some(id) = type_ref.get("id") else {
            continue;
        };
        let display = type_ref
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        push_unique(
            &mut options,
            &mut seen,
            id.clone(),
            MergeOption {
                label: display,
                value: type_ref.clone(),
            },
        );
    }
    let target = entities.first().and_then(|e| non_null(e.get("type")));
    merge_field(label, options, target)
}

/// Candidate areas under the given snapshot key, deduplicated by area id.
pub fn area_field(label: &str, key: &str, entities: &[Value]) -> MergeField {
    let mut options = Vec::new();
    let mut seen = Vec::new();
    for entity in entities {
        let Some(area) = non_null(entity.get(key)) else {
            continue;
        };
        let Some(id) = area.get("id") else {
            continue;
        };
        let display = area
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        push_unique(
            &mut options,
            &mut seen,
            id.clone(),
            MergeOption {
                label: display,
                value: area.clone(),
            },
        );
    }
    let target = entities.first().and_then(|e| non_null(e.get(key)));
    merge_field(label, options, target)
}

fn date_field(label: &str, key: &str, entities: &[Value]) -> MergeField {
    let mut options = Vec::new();
    let mut seen = Vec::new();
    for entity in entities {
        let Some(raw) = entity.get(key).and_then(Value::as_str) else {
            continue;
        };
        let option = transform_iso_date_for_select(raw);
        push_unique(
            &mut options,
            &mut seen,
            Value::String(option.value.clone()),
            MergeOption {
                label: option.label,
                value: Value::String(option.value),
            },
        );
    }
    // Same type filter as option collection, so the default is always
    // one of the collected options.
    let target = entities
        .first()
        .and_then(|e| e.get(key))
        .and_then(Value::as_str)
        .map(|s| Value::String(s.to_string()));
    merge_field(label, options, target)
}

/// Candidate begin dates, deduplicated by the raw stored string.
pub fn begin_date_field(label: &str, entities: &[Value]) -> MergeField {
    date_field(label, "beginDate", entities)
}

/// Candidate end dates, deduplicated by the raw stored string.
pub fn end_date_field(label: &str, entities: &[Value]) -> MergeField {
    date_field(label, "endDate", entities)
}

/// Candidate ended flags, rendered as Yes/No.
pub fn ended_field(label: &str, entities: &[Value]) -> MergeField {
    let mut options = Vec::new();
    let mut seen = Vec::new();
    for entity in entities {
        let Some(ended) = entity.get("ended").and_then(Value::as_bool) else {
            continue;
        };
        push_unique(
            &mut options,
            &mut seen,
            Value::Bool(ended),
            MergeOption {
                label: (if ended { "Yes" } else { "No" }).to_string(),
                value: Value::Bool(ended),
            },
        );
    }
    let target = entities
        .first()
        .and_then(|e| e.get("ended"))
        .and_then(Value::as_bool)
        .map(Value::Bool);
    merge_field(label, options, target)
}
