//! Aggregation of raw changes into display-ready per-entity diffs.
//!
//! This is the lossy stage of the pipeline: changes whose path has no
//! display mapping are dropped, and changes whose kind disagrees with
//! their value presence are skipped. Neither aborts the batch; both are
//! counted in [`DiffStats`] and traced under the canonical event names so
//! operators can see what a formatting pass discarded.

use crate::diff::change::{Change, EntityRevisionDiff, FormattedChange, FormattedDiff};
use crate::diff::classifier;
use crate::diff::fields::{self, FieldMapping};
use crate::model::{Revision, RevisionDiff};
use revdiff_core_types::schema::{EVENT_MALFORMED_CHANGE, EVENT_UNMAPPED_FIELD};
use revdiff_core_types::EntityType;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What a formatting pass did with the raw changes it was given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Changes that produced a formatted entry
    pub formatted: usize,
    /// Changes dropped because their path has no display mapping
    pub unmapped: usize,
    /// Changes skipped because kind and value presence disagreed
    pub malformed: usize,
}

impl DiffStats {
    /// Total changes that produced no formatted entry.
    pub fn dropped(&self) -> usize {
        self.unmapped + self.malformed
    }
}

fn format_change(
    entity_type: EntityType,
    change: &Change,
    stats: &mut DiffStats,
) -> Option<FormattedChange> {
    if let Err(err) = classifier::validate(change) {
        warn!(
            component = module_path!(),
            event = EVENT_MALFORMED_CHANGE,
            entity_type = %entity_type,
            path = %change.path_display(),
            err.code = err.code(),
            "skipping malformed change"
        );
        stats.malformed += 1;
        return None;
    }
    match fields::recognize(entity_type, &change.path) {
        FieldMapping::Mapped(rule) => {
            stats.formatted += 1;
            Some(fields::apply(&rule, change))
        }
        FieldMapping::Unmapped => {
            debug!(
                component = module_path!(),
                event = EVENT_UNMAPPED_FIELD,
                entity_type = %entity_type,
                path = %change.path_display(),
                "dropping change to unmapped field"
            );
            stats.unmapped += 1;
            None
        }
    }
}

/// Format one entity's changes, preserving their incoming order.
pub fn format_entity_diff(diff: &EntityRevisionDiff, stats: &mut DiffStats) -> FormattedDiff {
    let changes = diff
        .changes
        .iter()
        .filter_map(|change| format_change(diff.entity_type, change, stats))
        .collect();
    FormattedDiff {
        entity_type: diff.entity_type,
        entity_id: diff.entity_id,
        changes,
    }
}

/// Format a batch of entity diffs in the order given.
pub fn format_entity_diffs(diffs: &[EntityRevisionDiff]) -> (Vec<FormattedDiff>, DiffStats) {
    let mut stats = DiffStats::default();
    let formatted = diffs
        .iter()
        .map(|diff| format_entity_diff(diff, &mut stats))
        .collect();
    (formatted, stats)
}

/// Assemble the display-ready diff for a whole revision.
///
/// Entity diffs are grouped by type in canonical display order
/// ([`EntityType::ALL`]); within one type the incoming order is preserved.
/// A merge revision touching several types thus always renders its sections
/// in the same order regardless of how the diffs were collected.
pub fn format_revision(revision: Revision, diffs: &[EntityRevisionDiff]) -> (RevisionDiff, DiffStats) {
    let mut stats = DiffStats::default();
    let mut ordered = Vec::with_capacity(diffs.len());
    for entity_type in EntityType::ALL {
        for diff in diffs.iter().filter(|d| d.entity_type == entity_type) {
            ordered.push(format_entity_diff(diff, &mut stats));
        }
    }
    debug!(
        component = module_path!(),
        revision_id = revision.id,
        change_count = diffs.iter().map(|d| d.changes.len()).sum::<usize>(),
        formatted_count = stats.formatted,
        "formatted revision diff"
    );
    (
        RevisionDiff {
            revision,
            diffs: ordered,
        },
        stats,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::change::{key_path, ChangeKind, Severity};
    use crate::model::Editor;
    use chrono::Utc;
    use revdiff_core_types::Bbid;
    use serde_json::json;

    fn entity_diff(entity_type: EntityType, changes: Vec<Change>) -> EntityRevisionDiff {
        EntityRevisionDiff {
            entity_type,
            entity_id: Bbid::new(),
            changes,
        }
    }

    fn revision() -> Revision {
        Revision {
            id: 42,
            author: Editor {
                id: 1,
                name: "Bookworm".to_string(),
            },
            created_at: Utc::now(),
            parent_ids: vec![41],
            notes: Vec::new(),
        }
    }

    #[test]
    fn test_edited_begin_date_formats_with_display_transform() {
        let diff = entity_diff(
            EntityType::Author,
            vec![Change::edited(
                key_path(&["beginDate"]),
                json!("+1990"),
                json!("+1991"),
            )],
        );
        let (formatted, stats) = format_entity_diffs(std::slice::from_ref(&diff));
        assert_eq!(formatted.len(), 1);
        let change = &formatted[0].changes[0];
        assert_eq!(change.label, "Begin Date");
        assert_eq!(change.old, vec!["1990"]);
        assert_eq!(change.new, vec!["1991"]);
        assert_eq!(change.severity, Severity::Edited);
        assert_eq!(stats.formatted, 1);
        assert_eq!(stats.dropped(), 0);
    }

    #[test]
    fn test_unmapped_field_is_dropped_and_counted() {
        let diff = entity_diff(
            EntityType::Author,
            vec![
                Change::added(key_path(&["internalCounter"]), json!(17)),
                Change::edited(key_path(&["ended"]), json!(false), json!(true)),
            ],
        );
        let (formatted, stats) = format_entity_diffs(std::slice::from_ref(&diff));
        assert_eq!(formatted[0].changes.len(), 1);
        assert_eq!(formatted[0].changes[0].label, "Ended");
        assert_eq!(stats.formatted, 1);
        assert_eq!(stats.unmapped, 1);
        assert_eq!(stats.malformed, 0);
    }

    #[test]
    fn test_malformed_change_skips_only_itself() {
        // Added change illegally carrying an old value
        let malformed = Change {
            path: key_path(&["ended"]),
            kind: ChangeKind::Added,
            old_value: Some(json!(false)),
            new_value: Some(json!(true)),
        };
        let diff = entity_diff(
            EntityType::Publisher,
            vec![
                malformed,
                Change::edited(key_path(&["beginDate"]), json!("+2000"), json!("+2001")),
            ],
        );
        let (formatted, stats) = format_entity_diffs(std::slice::from_ref(&diff));
        assert_eq!(formatted[0].changes.len(), 1);
        assert_eq!(formatted[0].changes[0].label, "Begin Date");
        assert_eq!(stats.malformed, 1);
        assert_eq!(stats.formatted, 1);
    }

    #[test]
    fn test_format_revision_orders_by_entity_type() {
        let diffs = vec![
            entity_diff(
                EntityType::Work,
                vec![Change::edited(
                    key_path(&["type"]),
                    json!({"label": "Novel"}),
                    json!({"label": "Poem"}),
                )],
            ),
            entity_diff(
                EntityType::Author,
                vec![Change::edited(key_path(&["ended"]), json!(false), json!(true))],
            ),
            entity_diff(
                EntityType::Edition,
                vec![Change::edited(key_path(&["pages"]), json!(100), json!(120))],
            ),
        ];
        let (revision_diff, stats) = format_revision(revision(), &diffs);
        let order: Vec<EntityType> = revision_diff
            .diffs
            .iter()
            .map(|d| d.entity_type)
            .collect();
        assert_eq!(
            order,
            vec![EntityType::Author, EntityType::Edition, EntityType::Work]
        );
        assert_eq!(stats.formatted, 3);
    }

    #[test]
    fn test_format_revision_preserves_order_within_type() {
        let first = entity_diff(
            EntityType::Author,
            vec![Change::edited(key_path(&["ended"]), json!(false), json!(true))],
        );
        let second = entity_diff(
            EntityType::Author,
            vec![Change::edited(
                key_path(&["beginDate"]),
                json!("+1990"),
                json!("+1991"),
            )],
        );
        let expected = vec![first.entity_id, second.entity_id];
        let (revision_diff, _) = format_revision(revision(), &[first, second]);
        let ids: Vec<Bbid> = revision_diff.diffs.iter().map(|d| d.entity_id).collect();
        assert_eq!(ids, expected);
    }
}
