//! Work field mapping.

use super::{FieldMapping, FieldRule};
use crate::diff::change::PathSegment;
use crate::diff::sets;

pub fn recognize(path: &[PathSegment]) -> FieldMapping {
    use PathSegment::Key;

    if sets::touches(&sets::LANGUAGE_SET, path) {
        return FieldMapping::Mapped(FieldRule::Set(&sets::LANGUAGE_SET));
    }

    match path {
        [Key(k)] if k == "type" => FieldMapping::Mapped(FieldRule::TypeRef {
            label: "Work Type".to_string(),
        }),
        _ => FieldMapping::Unmapped,
    }
}
