pub mod duration;
pub mod error;
pub mod models;
pub mod query;
pub mod sprint;
pub mod worklog;

#[cfg(test)]
mod tests;

pub use duration::duration_codec::{DEFAULT_HOURS_PER_DAY, DurationCodec};
pub use error::{CoreError, Result as CoreResult};
pub use models::board::Board;
pub use models::custom_field::CustomField;
pub use models::field_object::FieldObject;
pub use models::field_value::FieldValue;
pub use models::issue::Issue;
pub use models::issue_header::IssueHeader;
pub use models::sprint::Sprint;
pub use models::work_item::{WorkAuthor, WorkDuration, WorkItem};
pub use query::diagnostic::Diagnostic;
pub use query::query_build::QueryBuild;
pub use query::query_builder::{QueryFilter, build_query};
pub use sprint::sprint_plan::SprintPlan;
pub use sprint::sprint_resolver::{SprintRequest, SprintResolver};
pub use worklog::{has_work_on, issues_without_work_on};

/// Name of the custom field carrying the work-size estimate
pub const ESTIMATION_FIELD: &str = "Estimation";

/// Custom field names that may hold the issue assignee(s)
pub const ASSIGNEE_FIELDS: [&str; 2] = ["Assignee", "Assignee(s)"];

/// Placeholder shown when an issue has nobody assigned
pub const UNASSIGNED: &str = "unassigned";
