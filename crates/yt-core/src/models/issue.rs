use crate::{ASSIGNEE_FIELDS, CustomField, ESTIMATION_FIELD, FieldObject, FieldValue, Sprint, UNASSIGNED};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "idReadable")]
    pub id: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    /// Top-level assignee attribute, only consulted when no assignee custom field has names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<FieldObject>,
    /// Filled by a separate per-issue request
    #[serde(default)]
    pub sprints: Vec<Sprint>,
}

impl Issue {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, name: &str, value: FieldValue) -> Self {
        self.custom_fields.push(CustomField::new(name, value));
        self
    }

    /// First custom field called `name`
    pub fn field(&self, name: &str) -> Option<&CustomField> {
        self.custom_fields.iter().find(|field| field.name == name)
    }

    /// Presentation of the first Estimation field, if it is an object carrying one
    pub fn estimation(&self) -> Option<&str> {
        self.field(ESTIMATION_FIELD)
            .and_then(|field| field.value.presentation())
    }

    /// Display text of the first field called `name`
    pub fn field_text(&self, name: &str) -> Option<String> {
        self.field(name).map(|field| field.value.display_text())
    }

    /// Names from the assignee custom field, falling back to the top-level attribute
    pub fn assignee_display(&self) -> String {
        let from_fields = self
            .custom_fields
            .iter()
            .filter(|field| ASSIGNEE_FIELDS.contains(&field.name.as_str()))
            .map(|field| field.value.assignee_names())
            .find(|names| !names.is_empty());

        if let Some(names) = from_fields {
            return names.join(", ");
        }

        self.assignee
            .as_ref()
            .and_then(|user| user.full_name().or(user.login.as_deref()))
            .filter(|name| !name.is_empty())
            .unwrap_or(UNASSIGNED)
            .to_string()
    }

    pub fn sprint_names(&self) -> Vec<&str> {
        self.sprints.iter().map(|sprint| sprint.name.as_str()).collect()
    }
}
