//! Merge section selection state.
//!
//! Selections are tracked in an immutable state value updated through a
//! tagged action enum and a pure reducer. Callers own the state; applying
//! an action yields a new state and never mutates shared storage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The currently selected value for each merged field.
///
/// Reference-valued fields (type, area) hold the full referenced object so
/// that the selection can be rendered and committed without a second lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeSectionState {
    pub entity_type: Option<Value>,
    pub area: Option<Value>,
    pub begin_date: Option<String>,
    pub end_date: Option<String>,
    pub ended: bool,
}

/// A single selection change in the merge section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MergeAction {
    UpdateType(Option<Value>),
    UpdateArea(Option<Value>),
    UpdateBeginDate(Option<String>),
    UpdateEndDate(Option<String>),
    UpdateEnded(bool),
}

/// Initial state seeded from the merge target's snapshot.
pub fn initial_state(target: &Value) -> MergeSectionState {
    let field = |key: &str| target.get(key).filter(|v| !v.is_null()).cloned();
    let date = |key: &str| {
        target
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    MergeSectionState {
        entity_type: field("type"),
        area: field("area"),
        begin_date: date("beginDate"),
        end_date: date("endDate"),
        ended: target.get("ended").and_then(Value::as_bool).unwrap_or(false),
    }
}

/// Apply one action, producing the next state.
pub fn reduce(state: &MergeSectionState, action: MergeAction) -> MergeSectionState {
    let mut next = state.clone();
    match action {
        MergeAction::UpdateType(value) => next.entity_type = value,
        MergeAction::UpdateArea(value) => next.area = value,
        MergeAction::UpdateBeginDate(value) => next.begin_date = value,
        MergeAction::UpdateEndDate(value) => next.end_date = value,
        MergeAction::UpdateEnded(value) => next.ended = value,
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_state_seeds_from_target() {
        let target = json!({
            "type": {"id": 1, "label": "Publisher"},
            "area": null,
            "beginDate": "+1999",
            "ended": true
        });
        let state = initial_state(&target);
        assert_eq!(state.entity_type, Some(json!({"id": 1, "label": "Publisher"})));
        assert_eq!(state.area, None);
        assert_eq!(state.begin_date, Some("+1999".to_string()));
        assert_eq!(state.end_date, None);
        assert!(state.ended);
    }

    #[test]
    fn test_reduce_updates_only_the_targeted_field() {
        let state = initial_state(&json!({"beginDate": "+1999", "ended": false}));
        let next = reduce(&state, MergeAction::UpdateEndDate(Some("+2001".to_string())));
        assert_eq!(next.end_date, Some("+2001".to_string()));
        assert_eq!(next.begin_date, state.begin_date);
        assert!(!next.ended);
        // original untouched
        assert_eq!(state.end_date, None);
    }

    #[test]
    fn test_reduce_can_clear_a_selection() {
        let state = initial_state(&json!({"area": {"id": 2, "name": "Y"}}));
        let next = reduce(&state, MergeAction::UpdateArea(None));
        assert_eq!(next.area, None);
    }
}
