use crate::error::Result as CliResult;

use serde_json::Value;

/// What a command prints on stdout
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Text(String),
    Json(Value),
}

impl Output {
    pub fn render(&self, pretty: bool) -> CliResult<String> {
        match self {
            Output::Text(text) => Ok(text.clone()),
            Output::Json(value) if pretty => Ok(serde_json::to_string_pretty(value)?),
            Output::Json(value) => Ok(serde_json::to_string(value)?),
        }
    }
}
