use crate::FieldObject;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of a custom field.
///
/// The tracker sends whatever JSON shape the field type dictates; it is
/// normalized into one of these variants on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FieldValue {
    #[default]
    Absent,
    Scalar(String),
    Object(FieldObject),
    ObjectList(Vec<FieldObject>),
}

impl FieldValue {
    /// Human-readable text for table output
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Absent => String::new(),
            FieldValue::Scalar(text) => text.clone(),
            FieldValue::Object(object) => object.display_text().to_string(),
            FieldValue::ObjectList(objects) => objects
                .iter()
                .map(FieldObject::display_text)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Full names of the user(s) held by this value
    pub fn assignee_names(&self) -> Vec<String> {
        match self {
            FieldValue::Object(object) => object.full_name().map(String::from).into_iter().collect(),
            FieldValue::ObjectList(objects) => objects
                .iter()
                .filter_map(FieldObject::full_name)
                .map(String::from)
                .collect(),
            FieldValue::Absent | FieldValue::Scalar(_) => Vec::new(),
        }
    }

    /// The `presentation` string of an object value (period fields such as Estimation)
    pub fn presentation(&self) -> Option<&str> {
        match self {
            FieldValue::Object(object) => object.presentation.as_deref(),
            FieldValue::Absent | FieldValue::Scalar(_) | FieldValue::ObjectList(_) => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Absent,
            Value::String(text) => FieldValue::Scalar(text),
            Value::Bool(flag) => FieldValue::Scalar(flag.to_string()),
            Value::Number(number) => FieldValue::Scalar(number.to_string()),
            Value::Object(map) => FieldValue::Object(FieldObject::from_json_map(&map)),
            // Non-object list entries carry nothing we display
            Value::Array(items) => FieldValue::ObjectList(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(FieldObject::from_json_map)
                    .collect(),
            ),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Absent => Value::Null,
            FieldValue::Scalar(text) => Value::String(text),
            FieldValue::Object(object) => Value::Object(object.to_json_map()),
            FieldValue::ObjectList(objects) => Value::Array(
                objects
                    .iter()
                    .map(|object| Value::Object(object.to_json_map()))
                    .collect(),
            ),
        }
    }
}
