use crate::models::epoch_millis_or_zero;

use serde::{Deserialize, Serialize};

/// A time-tracking entry on an issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    #[serde(default, deserialize_with = "epoch_millis_or_zero")]
    pub date: i64,
    #[serde(default)]
    pub duration: WorkDuration,
    #[serde(default)]
    pub author: WorkAuthor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl WorkItem {
    pub fn dated(date: i64) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDuration {
    #[serde(default)]
    pub minutes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkAuthor {
    #[serde(default)]
    pub login: String,
}
