use crate::models::epoch_millis_or_zero;

use serde::{Deserialize, Serialize};

/// A time-boxed iteration of a board.
///
/// `start` and `finish` are epoch milliseconds where `0` means the tracker
/// returned no value. Use [`Sprint::start`] / [`Sprint::finish`] for any date
/// comparison so unset values are never treated as the epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, rename = "start", deserialize_with = "epoch_millis_or_zero")]
    pub start_ms: i64,
    #[serde(default, rename = "finish", deserialize_with = "epoch_millis_or_zero")]
    pub finish_ms: i64,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub archived: bool,
}

impl Sprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, start_ms: i64, finish_ms: i64) -> Self {
        self.start_ms = start_ms;
        self.finish_ms = finish_ms;
        self
    }

    pub fn current(mut self) -> Self {
        self.is_current = true;
        self
    }

    pub fn start(&self) -> Option<i64> {
        (self.start_ms != 0).then_some(self.start_ms)
    }

    pub fn finish(&self) -> Option<i64> {
        (self.finish_ms != 0).then_some(self.finish_ms)
    }

    /// True when both bounds are set and `now_ms` lies inside them (inclusive)
    pub fn contains(&self, now_ms: i64) -> bool {
        match (self.start(), self.finish()) {
            (Some(start), Some(finish)) => start <= now_ms && now_ms <= finish,
            _ => false,
        }
    }
}
