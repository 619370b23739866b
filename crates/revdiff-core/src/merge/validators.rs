//! Validation of selected merge values.
//!
//! Validation binds to the *selected* value of each field, not to every
//! candidate: a source entity may carry a malformed date without blocking
//! the merge as long as that date is not the one selected.

use crate::dates::parse_extended_date;
use crate::merge::state::MergeSectionState;

/// Outcome of validating one field or a whole section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }
}

/// A begin date may be absent; when present it must parse.
pub fn validate_begin_date(begin_date: Option<&str>) -> ValidationResult {
    match begin_date {
        None | Some("") => ValidationResult::valid(),
        Some(s) if parse_extended_date(s).is_some() => ValidationResult::valid(),
        Some(_) => ValidationResult::invalid("Begin date is not a valid date"),
    }
}

/// An end date is only meaningful when the entity has ended.
///
/// When `ended` is false the end date is ignored entirely. When true, a
/// present end date must parse and must not precede the begin date (partial
/// dates compare with missing components as the first unit of their period).
pub fn validate_end_date(
    begin_date: Option<&str>,
    end_date: Option<&str>,
    ended: bool,
) -> ValidationResult {
    if !ended {
        return ValidationResult::valid();
    }
    let end = match end_date {
        None | Some("") => return ValidationResult::valid(),
        Some(s) => match parse_extended_date(s) {
            Some(date) => date,
            None => return ValidationResult::invalid("End date is not a valid date"),
        },
    };
    if let Some(begin) = begin_date.and_then(parse_extended_date) {
        if end < begin {
            return ValidationResult::invalid("End date must not precede begin date");
        }
    }
    ValidationResult::valid()
}

/// Validate a whole merge section's selected values.
pub fn validate_merged_section(state: &MergeSectionState) -> ValidationResult {
    let begin = validate_begin_date(state.begin_date.as_deref());
    if !begin.is_valid {
        return begin;
    }
    validate_end_date(
        state.begin_date.as_deref(),
        state.end_date.as_deref(),
        state.ended,
    )
}
