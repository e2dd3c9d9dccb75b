//! Estimation text <-> minutes.
//!
//! Durations are plain minute counts. Days are a display unit only and use
//! the organisation's working-day length (`hours_per_day`, 6 by default),
//! not 24 hours.

use crate::{CoreError, CoreResult, Issue};

use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_HOURS_PER_DAY: u32 = 6;

const MINUTES_PER_HOUR: u64 = 60;

static DURATION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)(d|h|m)").expect("Invalid regex pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationCodec {
    hours_per_day: u32,
}

impl Default for DurationCodec {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }
}

impl DurationCodec {
    #[track_caller]
    pub fn new(hours_per_day: u32) -> CoreResult<Self> {
        if hours_per_day == 0 {
            return Err(CoreError::validation("hours_per_day must be greater than 0"));
        }
        Ok(Self { hours_per_day })
    }

    pub fn hours_per_day(&self) -> u32 {
        self.hours_per_day
    }

    fn minutes_per_day(&self) -> u64 {
        u64::from(self.hours_per_day) * MINUTES_PER_HOUR
    }

    /// Parse text such as `"2d 4h"` into minutes.
    ///
    /// Every `<digits><d|h|m>` token counts, repeated units add up, and
    /// anything else (including numbers too large to represent) is ignored.
    pub fn parse(&self, text: &str) -> u64 {
        DURATION_TOKEN
            .captures_iter(text)
            .filter_map(|caps| {
                let value: u64 = caps[1].parse().ok()?;
                let unit_minutes = match &caps[2] {
                    "d" => self.minutes_per_day(),
                    "h" => MINUTES_PER_HOUR,
                    _ => 1,
                };
                Some(value.saturating_mul(unit_minutes))
            })
            .fold(0, u64::saturating_add)
    }

    /// Total of the first Estimation field of every issue
    pub fn sum_estimations(&self, issues: &[Issue]) -> u64 {
        issues
            .iter()
            .filter_map(Issue::estimation)
            .map(|presentation| self.parse(presentation))
            .fold(0, u64::saturating_add)
    }

    /// Render minutes as `"1d 3h 45m"`; zero renders as `"0m"`
    pub fn humanize(&self, minutes: u64) -> String {
        if minutes == 0 {
            return String::from("0m");
        }

        let mut parts = Vec::with_capacity(3);

        let mut hours = minutes / MINUTES_PER_HOUR;
        let hours_per_day = u64::from(self.hours_per_day);
        let days = hours / hours_per_day;
        if days > 0 {
            parts.push(format!("{days}d"));
            hours %= hours_per_day;
        }

        if hours > 0 {
            parts.push(format!("{hours}h"));
        }

        let remainder = minutes % MINUTES_PER_HOUR;
        if remainder > 0 || parts.is_empty() {
            parts.push(format!("{remainder}m"));
        }

        parts.join(" ")
    }
}
