//! Choosing the sprint a listing command filters on.
//!
//! An explicit name wins, then the configured default. Otherwise the board's
//! sprints are listed once and searched in stages:
//!
//! 1. the first sprint flagged current,
//! 2. the first sprint whose set start/finish range contains `now`,
//! 3. the most recently finished sprint,
//! 4. the soonest upcoming sprint,
//! 5. the highest trailing number in the name, then the greatest name.
//!
//! The last stage always yields a sprint for a non-empty list.

use crate::{CoreError, CoreResult, Sprint, SprintPlan};

use std::cmp::Ordering;
use std::fmt::Display;

/// Inputs to resolution; empty strings mean "not given"
#[derive(Debug, Clone, Copy, Default)]
pub struct SprintRequest<'a> {
    pub explicit: &'a str,
    pub configured_default: &'a str,
    pub board: &'a str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SprintResolver;

impl SprintResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve in one go, calling `sprints_of` at most once and only when discovery is needed
    #[track_caller]
    pub fn resolve<F, E>(
        &self,
        request: &SprintRequest<'_>,
        now_ms: i64,
        sprints_of: F,
    ) -> CoreResult<String>
    where
        F: FnOnce(&str) -> Result<Vec<Sprint>, E>,
        E: Display,
    {
        match self.plan(request)? {
            SprintPlan::Named(name) => Ok(name),
            SprintPlan::Discover { board } => {
                let listing = sprints_of(&board);
                self.pick(&board, listing, now_ms)
            }
        }
    }

    /// Decide whether a name is already known, without touching the collaborator
    #[track_caller]
    pub fn plan(&self, request: &SprintRequest<'_>) -> CoreResult<SprintPlan> {
        if !request.explicit.is_empty() {
            return Ok(SprintPlan::Named(request.explicit.to_string()));
        }
        if !request.configured_default.is_empty() {
            return Ok(SprintPlan::Named(request.configured_default.to_string()));
        }
        if request.board.is_empty() {
            return Err(CoreError::configuration(
                "board not configured, cannot auto-detect sprint",
            ));
        }
        Ok(SprintPlan::Discover {
            board: request.board.to_string(),
        })
    }

    /// Pick a sprint name from the collaborator's answer for `board`
    #[track_caller]
    pub fn pick<E: Display>(
        &self,
        board: &str,
        listing: Result<Vec<Sprint>, E>,
        now_ms: i64,
    ) -> CoreResult<String> {
        let sprints = listing.map_err(|e| CoreError::upstream(board, e))?;

        if sprints.is_empty() {
            return Err(CoreError::not_found(format!(
                "no sprints found for board '{board}'"
            )));
        }

        self.select(&sprints, now_ms)
            .map(|sprint| sprint.name.clone())
            .ok_or_else(|| CoreError::not_found(format!("no sprint selected for board '{board}'")))
    }

    /// Run the selection stages; `None` only for an empty slice
    pub fn select<'s>(&self, sprints: &'s [Sprint], now_ms: i64) -> Option<&'s Sprint> {
        sprints
            .iter()
            .find(|sprint| sprint.is_current)
            .or_else(|| sprints.iter().find(|sprint| sprint.contains(now_ms)))
            .or_else(|| most_recently_finished(sprints, now_ms))
            .or_else(|| soonest_upcoming(sprints, now_ms))
            .or_else(|| highest_numbered(sprints))
    }
}

fn most_recently_finished(sprints: &[Sprint], now_ms: i64) -> Option<&Sprint> {
    closest(sprints, |sprint| {
        sprint
            .finish()
            .filter(|finish| *finish <= now_ms)
            .map(|finish| i128::from(now_ms) - i128::from(finish))
    })
}

fn soonest_upcoming(sprints: &[Sprint], now_ms: i64) -> Option<&Sprint> {
    closest(sprints, |sprint| {
        sprint
            .start()
            .filter(|start| *start > now_ms)
            .map(|start| i128::from(start) - i128::from(now_ms))
    })
}

/// Smallest distance wins; on equal distances the earlier sprint is kept.
/// Distances are `i128` so any pair of `i64` timestamps subtracts exactly.
fn closest<F>(sprints: &[Sprint], distance: F) -> Option<&Sprint>
where
    F: Fn(&Sprint) -> Option<i128>,
{
    let mut best: Option<(i128, &Sprint)> = None;
    for sprint in sprints {
        if let Some(delta) = distance(sprint)
            && best.is_none_or(|(best_delta, _)| delta < best_delta)
        {
            best = Some((delta, sprint));
        }
    }
    best.map(|(_, sprint)| sprint)
}

fn highest_numbered(sprints: &[Sprint]) -> Option<&Sprint> {
    sprints.iter().reduce(|best, candidate| {
        match compare_by_number_then_name(candidate, best) {
            Ordering::Greater => candidate,
            Ordering::Less | Ordering::Equal => best,
        }
    })
}

fn compare_by_number_then_name(a: &Sprint, b: &Sprint) -> Ordering {
    trailing_number(&a.name)
        .cmp(&trailing_number(&b.name))
        .then_with(|| a.name.cmp(&b.name))
}

/// Trailing run of ASCII digits in `name`, or 0 when there is none or it overflows
pub(crate) fn trailing_number(name: &str) -> u64 {
    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    name[stem.len()..].parse().unwrap_or(0)
}
