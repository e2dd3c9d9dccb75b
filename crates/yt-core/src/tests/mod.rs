
use crate::{FieldObject, FieldValue};

pub(crate) const DAY_MS: i64 = 86_400_000;
pub(crate) const NOW_MS: i64 = 1_750_000_000_000;

/// Object value carrying only a presentation, the shape of period fields
pub(crate) fn period(presentation: &str) -> FieldValue {
    FieldValue::Object(FieldObject {
        presentation: Some(presentation.to_string()),
        ..FieldObject::default()
    })
}

pub(crate) fn user(full_name: &str) -> FieldObject {
    FieldObject {
        full_name: Some(full_name.to_string()),
        login: Some(full_name.to_lowercase()),
        ..FieldObject::default()
    }
}
