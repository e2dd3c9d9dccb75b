use crate::{Diagnostic, QueryBuild};

const ASSIGNEE_ME: &str = "me";
const ASSIGNEE_UNASSIGNED: &str = "unassigned";

/// Filter inputs as typed on the command line; empty strings mean "not given"
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryFilter<'a> {
    pub assignee: &'a str,
    pub issue_type: &'a str,
    pub sprint: &'a str,
    pub board: &'a str,
}

/// Assemble the tracker filter expression.
///
/// Clauses always appear in the order assignee, type, sprint. Names are
/// inserted verbatim; escaping for transport is left to the HTTP layer.
pub fn build_query(filter: &QueryFilter<'_>) -> QueryBuild {
    let mut parts = Vec::with_capacity(3);
    let mut diagnostics = Vec::new();

    parts.push(match filter.assignee {
        "" | ASSIGNEE_ME => String::from("for:me"),
        ASSIGNEE_UNASSIGNED => String::from("assignee: unassigned"),
        name => format!("for: {name}"),
    });

    if !filter.issue_type.is_empty() {
        parts.push(format!("Type: {}", filter.issue_type));
    }

    if !filter.sprint.is_empty() {
        if filter.board.is_empty() {
            diagnostics.push(Diagnostic::SprintFilterSkipped {
                sprint: filter.sprint.to_string(),
            });
        } else {
            parts.push(format!("Board {}: {{{}}}", filter.board, filter.sprint));
        }
    }

    QueryBuild {
        query: parts.join(" "),
        diagnostics,
    }
}
