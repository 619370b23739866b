//! Edition field mapping.

use super::{start_case, FieldMapping, FieldRule};
use crate::diff::change::PathSegment;
use crate::diff::sets;

pub fn recognize(path: &[PathSegment]) -> FieldMapping {
    use PathSegment::Key;

    if let [Key(k)] = path {
        if k == "editionGroupBbid" {
            return FieldMapping::Mapped(FieldRule::Scalar {
                label: "EditionGroup".to_string(),
            });
        }
    }

    if sets::touches(&sets::PUBLISHER_SET, path) {
        return FieldMapping::Mapped(FieldRule::Set(&sets::PUBLISHER_SET));
    }
    if sets::touches(&sets::RELEASE_EVENT_SET, path) {
        return FieldMapping::Mapped(FieldRule::Set(&sets::RELEASE_EVENT_SET));
    }
    if sets::touches(&sets::LANGUAGE_SET, path) {
        return FieldMapping::Mapped(FieldRule::Set(&sets::LANGUAGE_SET));
    }

    match path {
        [Key(k)] if matches!(k.as_str(), "width" | "height" | "depth" | "weight") => {
            FieldMapping::Mapped(FieldRule::Scalar {
                label: start_case(k),
            })
        }
        [Key(k)] if k == "pages" => FieldMapping::Mapped(FieldRule::Scalar {
            label: "Page Count".to_string(),
        }),
        [Key(k)] if k == "editionFormat" => FieldMapping::Mapped(FieldRule::TypeRef {
            label: "Edition Format".to_string(),
        }),
        [Key(k)] if k == "editionStatus" => FieldMapping::Mapped(FieldRule::TypeRef {
            label: "Edition Status".to_string(),
        }),
        _ => FieldMapping::Unmapped,
    }
}
