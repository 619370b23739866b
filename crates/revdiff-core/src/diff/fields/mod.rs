//! Per-entity field formatters.
//!
//! Each entity type maps a closed set of known field paths to a
//! [`FieldRule`]. Recognition is explicit: a path outside the mapping
//! returns [`FieldMapping::Unmapped`], which the aggregator drops silently
//! (internal bookkeeping fields are never shown to end users). Rules are
//! tried in declared order and the first match wins, so at most one
//! formatted change is ever produced per change.

pub mod author;
pub mod edition;
pub mod edition_group;
pub mod publisher;
pub mod work;

use crate::dates::transform_iso_date_for_display;
use crate::diff::change::{Change, FormattedChange, PathSegment, Severity};
use crate::diff::sets::{self, SetDescriptor};
use crate::diff::display_value;
use revdiff_core_types::EntityType;
use serde_json::Value;

/// How a recognized field renders its old/new values.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// Plain text rendering via the value's string form
    Scalar { label: String },
    /// Extended ISO date rendering with raw-string fallback
    Date { label: String },
    /// Render the referenced type's `label` field
    TypeRef { label: String },
    /// Render the nested area's `name` field
    AreaRef { label: String },
    /// Render the gender's `name` field
    Gender,
    /// Boolean rendered as Yes/No
    Ended,
    /// Set-valued field rendered one line per member
    Set(&'static SetDescriptor),
}

/// Outcome of looking a change path up in an entity's field mapping.
///
/// `Unmapped` is a first-class variant, not an error: the aggregator counts
/// and traces these, then drops them.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMapping {
    Mapped(FieldRule),
    Unmapped,
}

/// Look up the formatting rule for a change path on the given entity type.
pub fn recognize(entity_type: EntityType, path: &[PathSegment]) -> FieldMapping {
    match entity_type {
        EntityType::Author => author::recognize(path),
        EntityType::Edition => edition::recognize(path),
        EntityType::EditionGroup => edition_group::recognize(path),
        EntityType::Publisher => publisher::recognize(path),
        EntityType::Work => work::recognize(path),
    }
}

/// Apply a formatting rule to a (validated) change.
pub fn apply(rule: &FieldRule, change: &Change) -> FormattedChange {
    if let FieldRule::Set(descriptor) = rule {
        return sets::format_set_change(descriptor, change);
    }
    FormattedChange {
        label: rule_label(rule).to_string(),
        old: value_lines(rule, change.old_value.as_ref()),
        new: value_lines(rule, change.new_value.as_ref()),
        severity: Severity::from(change.kind),
    }
}

fn rule_label(rule: &FieldRule) -> &str {
    match rule {
        FieldRule::Scalar { label }
        | FieldRule::Date { label }
        | FieldRule::TypeRef { label }
        | FieldRule::AreaRef { label } => label,
        FieldRule::Gender => "Gender",
        FieldRule::Ended => "Ended",
        FieldRule::Set(descriptor) => descriptor.label,
    }
}

/// Render one side of a change as display lines; list values render one
/// line per element.
fn value_lines(rule: &FieldRule, value: Option<&Value>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(|v| render_one(rule, v)).collect(),
        Some(other) => vec![render_one(rule, other)],
    }
}

fn render_one(rule: &FieldRule, value: &Value) -> String {
    match rule {
        FieldRule::Scalar { .. } => display_value(value),
        FieldRule::Date { .. } => match value.as_str() {
            Some(s) => transform_iso_date_for_display(s),
            None => display_value(value),
        },
        FieldRule::TypeRef { .. } => attribute_or_display(value, "label"),
        FieldRule::AreaRef { .. } | FieldRule::Gender => attribute_or_display(value, "name"),
        FieldRule::Ended => match value.as_bool() {
            Some(true) => "Yes".to_string(),
            Some(false) => "No".to_string(),
            None => display_value(value),
        },
        // Handled by format_set_change before render_one is reached
        FieldRule::Set(descriptor) => descriptor.label.to_string(),
    }
}

/// Render a reference object via one of its attributes, falling back to the
/// raw value when the change carries only a leaf fragment.
fn attribute_or_display(value: &Value, attribute: &str) -> String {
    value
        .get(attribute)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| display_value(value))
}

/// Capitalize a single snapshot key for display, e.g. `width` → `Width`.
pub(crate) fn start_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::change::key_path;
    use serde_json::json;

    #[test]
    fn test_scalar_rule_renders_plain_text() {
        let rule = FieldRule::Scalar {
            label: "Page Count".to_string(),
        };
        let change = Change::edited(key_path(&["pages"]), json!(200), json!(210));
        let formatted = apply(&rule, &change);
        assert_eq!(formatted.label, "Page Count");
        assert_eq!(formatted.old, vec!["200"]);
        assert_eq!(formatted.new, vec!["210"]);
        assert_eq!(formatted.severity, Severity::Edited);
    }

    #[test]
    fn test_date_rule_transforms_and_falls_back() {
        let rule = FieldRule::Date {
            label: "Begin Date".to_string(),
        };
        let change = Change::edited(key_path(&["beginDate"]), json!("+1990"), json!("bogus"));
        let formatted = apply(&rule, &change);
        assert_eq!(formatted.old, vec!["1990"]);
        assert_eq!(formatted.new, vec!["bogus"]);
    }

    #[test]
    fn test_date_rule_renders_list_values_line_per_item() {
        let rule = FieldRule::Date {
            label: "Begin Date".to_string(),
        };
        let change = Change::added(
            key_path(&["beginDate"]),
            json!(["+1990", "+1991-02"]),
        );
        let formatted = apply(&rule, &change);
        assert_eq!(formatted.new, vec!["1990", "1991-02"]);
    }

    #[test]
    fn test_type_ref_renders_label_field() {
        let rule = FieldRule::TypeRef {
            label: "Author Type".to_string(),
        };
        let change = Change::edited(
            key_path(&["type"]),
            json!({"id": 1, "label": "Person"}),
            json!({"id": 2, "label": "Group"}),
        );
        let formatted = apply(&rule, &change);
        assert_eq!(formatted.old, vec!["Person"]);
        assert_eq!(formatted.new, vec!["Group"]);
    }

    #[test]
    fn test_area_ref_falls_back_to_leaf_fragment() {
        let rule = FieldRule::AreaRef {
            label: "Begin Area".to_string(),
        };
        // Deep edit at beginArea.name carries plain strings
        let change = Change::edited(
            key_path(&["beginArea", "name"]),
            json!("Berlin"),
            json!("Hamburg"),
        );
        let formatted = apply(&rule, &change);
        assert_eq!(formatted.old, vec!["Berlin"]);
        assert_eq!(formatted.new, vec!["Hamburg"]);
    }

    #[test]
    fn test_ended_renders_yes_no() {
        let change = Change::edited(key_path(&["ended"]), json!(false), json!(true));
        let formatted = apply(&FieldRule::Ended, &change);
        assert_eq!(formatted.old, vec!["No"]);
        assert_eq!(formatted.new, vec!["Yes"]);
    }

    #[test]
    fn test_start_case() {
        assert_eq!(start_case("width"), "Width");
        assert_eq!(start_case(""), "");
    }
}
