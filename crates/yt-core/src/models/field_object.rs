use serde::{Deserialize, Serialize};

/// Object-shaped custom field value (enum value, user, period, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
}

impl FieldObject {
    /// Non-empty `presentation`, else `name`, else the empty string
    pub fn display_text(&self) -> &str {
        match (&self.presentation, &self.name) {
            (Some(presentation), _) if !presentation.is_empty() => presentation,
            (_, Some(name)) => name,
            _ => "",
        }
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref().filter(|name| !name.is_empty())
    }
}

const PRESENTATION: &str = "presentation";
const NAME: &str = "name";
const FULL_NAME: &str = "fullName";
const LOGIN: &str = "login";

impl FieldObject {
    /// Lenient extraction: keys that are missing or not strings become `None`
    pub(crate) fn from_json_map(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        let text = |key: &str| map.get(key).and_then(|v| v.as_str()).map(String::from);

        Self {
            presentation: text(PRESENTATION),
            name: text(NAME),
            full_name: text(FULL_NAME),
            login: text(LOGIN),
        }
    }

    pub(crate) fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        let entries = [
            (PRESENTATION, &self.presentation),
            (NAME, &self.name),
            (FULL_NAME, &self.full_name),
            (LOGIN, &self.login),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                map.insert(key.to_string(), serde_json::Value::String(value.clone()));
            }
        }
        map
    }
}
