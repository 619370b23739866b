//! Merge-field reconciliation.
//!
//! When several entities are merged into one, each single-valued field may
//! carry conflicting values across the sources. This module collects the
//! distinct candidate values per field ([`options`]), tracks which value the
//! editor has selected ([`state`]), and validates the selected values before
//! the merge is committed ([`validators`]).

pub mod options;
pub mod state;
pub mod validators;

pub use options::{
    area_field, begin_date_field, end_date_field, ended_field, type_field, MergeField, MergeOption,
};
pub use state::{initial_state, reduce, MergeAction, MergeSectionState};
pub use validators::{
    validate_begin_date, validate_end_date, validate_merged_section, ValidationResult,
};
