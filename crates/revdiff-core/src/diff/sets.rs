//! Set-valued field formatters.
//!
//! Publishers, release events and languages live in set objects hanging off
//! the entity snapshot (`publisherSet.publishers[..]` and so on). A change
//! anywhere under the set root is reported as a change to the whole set,
//! rendered one line per member, rather than as an opaque scalar diff.

use crate::dates::transform_iso_date_for_display;
use crate::diff::change::{Change, FormattedChange, PathSegment, Severity};
use crate::diff::display_value;
use serde_json::Value;

/// Which attribute of a set member carries its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAttribute {
    /// `defaultAlias.name`, falling back to `(unnamed)`
    DefaultAliasName,
    /// Plain `name` field
    Name,
    /// `date` field, rendered through the ISO date display transform
    Date,
}

/// Static description of one set-valued field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDescriptor {
    /// Snapshot key the set hangs off
    pub root: &'static str,
    /// Display label for the whole set
    pub label: &'static str,
    /// Key of the member array inside the set object
    pub members_key: &'static str,
    pub attribute: MemberAttribute,
}

pub const PUBLISHER_SET: SetDescriptor = SetDescriptor {
    root: "publisherSet",
    label: "Publishers",
    members_key: "publishers",
    attribute: MemberAttribute::DefaultAliasName,
};

pub const RELEASE_EVENT_SET: SetDescriptor = SetDescriptor {
    root: "releaseEventSet",
    label: "Release Events",
    members_key: "releaseEvents",
    attribute: MemberAttribute::Date,
};

pub const LANGUAGE_SET: SetDescriptor = SetDescriptor {
    root: "languageSet",
    label: "Languages",
    members_key: "languages",
    attribute: MemberAttribute::Name,
};

/// Whether a change path touches this set (starts at its root key).
pub fn touches(descriptor: &SetDescriptor, path: &[PathSegment]) -> bool {
    path.first()
        .and_then(PathSegment::as_key)
        .is_some_and(|key| key == descriptor.root)
}

/// Format a change that touches a set as a whole-set description.
pub fn format_set_change(descriptor: &SetDescriptor, change: &Change) -> FormattedChange {
    FormattedChange {
        label: descriptor.label.to_string(),
        old: member_lines(descriptor, change.old_value.as_ref()),
        new: member_lines(descriptor, change.new_value.as_ref()),
        severity: Severity::from(change.kind),
    }
}

/// Render one side of a set change as display lines.
///
/// The change value may be the whole set object, the bare member array, a
/// single member, or (for deep paths) a leaf fragment; each shape renders
/// to the most specific text available.
fn member_lines(descriptor: &SetDescriptor, value: Option<&Value>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    if let Some(members) = value.get(descriptor.members_key).and_then(Value::as_array) {
        return members.iter().map(|m| render_member(descriptor, m)).collect();
    }
    if let Some(members) = value.as_array() {
        return members.iter().map(|m| render_member(descriptor, m)).collect();
    }
    vec![render_member(descriptor, value)]
}

fn render_member(descriptor: &SetDescriptor, member: &Value) -> String {
    match descriptor.attribute {
        MemberAttribute::DefaultAliasName => member
            .pointer("/defaultAlias/name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| match member {
                Value::Object(_) => "(unnamed)".to_string(),
                other => display_value(other),
            }),
        MemberAttribute::Name => member
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| display_value(member)),
        MemberAttribute::Date => member
            .get("date")
            .and_then(Value::as_str)
            .or_else(|| member.as_str())
            .map(transform_iso_date_for_display)
            .unwrap_or_else(|| display_value(member)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::change::key_path;
    use serde_json::json;

    #[test]
    fn test_touches_matches_root_and_deeper_paths() {
        assert!(touches(&LANGUAGE_SET, &key_path(&["languageSet"])));
        assert!(touches(
            &LANGUAGE_SET,
            &key_path(&["languageSet", "languages"])
        ));
        assert!(!touches(&LANGUAGE_SET, &key_path(&["publisherSet"])));
        assert!(!touches(&LANGUAGE_SET, &[]));
    }

    #[test]
    fn test_language_set_added_renders_member_names() {
        let change = Change::added(
            key_path(&["languageSet"]),
            json!({"languages": [{"name": "English"}, {"name": "French"}]}),
        );
        let formatted = format_set_change(&LANGUAGE_SET, &change);
        assert_eq!(formatted.label, "Languages");
        assert!(formatted.old.is_empty());
        assert_eq!(formatted.new, vec!["English", "French"]);
        assert_eq!(formatted.severity, Severity::Created);
    }

    #[test]
    fn test_publisher_set_renders_default_alias_names() {
        let change = Change::edited(
            key_path(&["publisherSet"]),
            json!({"publishers": [{"defaultAlias": {"name": "Ace Books"}}]}),
            json!({"publishers": [{"defaultAlias": {"name": "Ace Books"}}, {}]}),
        );
        let formatted = format_set_change(&PUBLISHER_SET, &change);
        assert_eq!(formatted.old, vec!["Ace Books"]);
        assert_eq!(formatted.new, vec!["Ace Books", "(unnamed)"]);
    }

    #[test]
    fn test_release_event_set_renders_transformed_dates() {
        let change = Change::added(
            key_path(&["releaseEventSet"]),
            json!({"releaseEvents": [{"date": "+1999-05-03"}]}),
        );
        let formatted = format_set_change(&RELEASE_EVENT_SET, &change);
        assert_eq!(formatted.new, vec!["1999-05-03"]);
    }

    #[test]
    fn test_deep_path_leaf_fragment_still_renders() {
        // A change at languageSet.languages.0.name carries only the leaf string.
        let mut path = key_path(&["languageSet", "languages"]);
        path.push(PathSegment::Index(0));
        path.push(PathSegment::Key("name".to_string()));
        let change = Change::edited(path, json!("English"), json!("German"));
        let formatted = format_set_change(&LANGUAGE_SET, &change);
        assert_eq!(formatted.old, vec!["English"]);
        assert_eq!(formatted.new, vec!["German"]);
    }
}
