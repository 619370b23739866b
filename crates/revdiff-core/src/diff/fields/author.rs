//! Author field mapping.

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
        [Key(k)] if k == "gender" => FieldMapping::Mapped(FieldRule::Gender),
        [Key(k)] if k == "ended" => FieldMapping::Mapped(FieldRule::Ended),
        [Key(k)] if k == "type" => FieldMapping::Mapped(FieldRule::TypeRef {
            label: "Author Type".to_string(),
        }),
        [Key(k)] if k == "beginArea" => FieldMapping::Mapped(FieldRule::AreaRef {
            label: "Begin Area".to_string(),
        }),
        [Key(k), Key(n)] if k == "beginArea" && n == "name" => {
            FieldMapping::Mapped(FieldRule::AreaRef {
                label: "Begin Area".to_string(),
            })
        }
        [Key(k)] if k == "endArea" => FieldMapping::Mapped(FieldRule::AreaRef {
            label: "End Area".to_string(),
        }),
        [Key(k), Key(n)] if k == "endArea" && n == "name" => {
            FieldMapping::Mapped(FieldRule::AreaRef {
                label: "End Area".to_string(),
            })
        }
        _ => FieldMapping::Unmapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::change::key_path;

    #[test]
    fn test_known_paths_map() {
        for (path, expected_label) in [
            (vec!["beginDate"], "Begin Date"),
            (vec!["endDate"], "End Date"),
            (vec!["type"], "Author Type"),
            (vec!["beginArea"], "Begin Area"),
            (vec!["beginArea", "name"], "Begin Area"),
            (vec!["endArea", "name"], "End Area"),
        ] {
            match recognize(&key_path(&path)) {
                FieldMapping::Mapped(
                    FieldRule::Date { label }
                    | FieldRule::TypeRef { label }
                    | FieldRule::AreaRef { label },
                ) => assert_eq!(label, expected_label),
                other => panic!("path {:?} mapped to {:?}", path, other),
            }
        }
        assert_eq!(
            recognize(&key_path(&["gender"])),
            FieldMapping::Mapped(FieldRule::Gender)
        );
        assert_eq!(
            recognize(&key_path(&["ended"])),
            FieldMapping::Mapped(FieldRule::Ended)
        );
    }

    #[test]
    fn test_internal_fields_are_unmapped() {
        assert_eq!(recognize(&key_path(&["bbid"])), FieldMapping::Unmapped);
        assert_eq!(
            recognize(&key_path(&["internalCounter"])),
            FieldMapping::Unmapped
        );
        assert_eq!(
            recognize(&key_path(&["aliasSet", "aliases"])),
            FieldMapping::Unmapped
        );
    }
}
