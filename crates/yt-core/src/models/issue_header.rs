use crate::models::epoch_millis_or_zero;

use serde::{Deserialize, Serialize};

/// The slim issue shape fetched by the daily work check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueHeader {
    #[serde(rename = "idReadable")]
    pub id: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "epoch_millis_or_zero")]
    pub updated: i64,
}

impl IssueHeader {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            updated: 0,
        }
    }

    /// `"<id>: <summary>"`, the line reported for issues missing work
    pub fn label(&self) -> String {
        format!("{}: {}", self.id, self.summary)
    }
}
