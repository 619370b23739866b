//! Edition group field mapping.

use super::{FieldMapping, FieldRule};
use crate::diff::change::PathSegment;

pub fn recognize(path: &[PathSegment]) -> FieldMapping {
    use PathSegment::Key;
    match path {
        [Key(k)] if k == "type" => FieldMapping::Mapped(FieldRule::TypeRef {
            label: "Edition Group Type".to_string(),
        }),
        _ => FieldMapping::Unmapped,
    }
}
