//! Which issues have no time logged on a given day.

use crate::{IssueHeader, WorkItem};

use chrono::{DateTime, NaiveDate};

/// True when any work item is dated on `day` (UTC calendar day)
pub fn has_work_on(items: &[WorkItem], day: NaiveDate) -> bool {
    items.iter().any(|item| {
        DateTime::from_timestamp_millis(item.date)
            .is_some_and(|logged| logged.date_naive() == day)
    })
}

/// `"<id>: <summary>"` for every issue with no work item on `day`, in input order
pub fn issues_without_work_on(entries: &[(IssueHeader, Vec<WorkItem>)], day: NaiveDate) -> Vec<String> {
    entries
        .iter()
        .filter(|(_, items)| !has_work_on(items, day))
        .map(|(issue, _)| issue.label())
        .collect()
}
