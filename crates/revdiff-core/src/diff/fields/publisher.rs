//! Publisher field mapping.

use super::{FieldMapping, FieldRule};
use crate::diff::change::PathSegment;

pub fn recognize(path: &[PathSegment]) -> FieldMapping {
    use PathSegment::Key;
    match path {
        [Key(k)] if k == "beginDate" => FieldMapping::Mapped(FieldRule::Date {
            label: "Begin Date".to_string(),
        }),
        [Key(k)] if k == "endDate" => FieldMapping::Mapped(FieldRule::Date {
            label: "End Date".to_string(),
        }),
        [Key(k)] if k == "ended" => FieldMapping::Mapped(FieldRule::Ended),
        [Key(k)] if k == "type" => FieldMapping::Mapped(FieldRule::TypeRef {
            label: "Publisher Type".to_string(),
        }),
        [Key(k)] if k == "area" => FieldMapping::Mapped(FieldRule::AreaRef {
            label: "Area".to_string(),
        }),
        [Key(k), Key(n)] if k == "area" && n == "name" => {
            FieldMapping::Mapped(FieldRule::AreaRef {
                label: "Area".to_string(),
            })
        }
        _ => FieldMapping::Unmapped,
    }
}
