//! Plain-text renderings of command results.

use yt_config::Config;
use yt_core::{Board, Issue, Sprint};

const NOT_AVAILABLE: &str = "N/A";

/// Custom field shown in each issue column, in column order
const ISSUE_FIELD_COLUMNS: [&str; 4] = ["Type", "State", "Estimation", "Spent time"];

fn cell(text: Option<String>) -> String {
    text.filter(|text| !text.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn issues_table(issues: &[Issue]) -> String {
    let header = issue_row([
        "ID",
        "Type",
        "Status",
        "Estimation",
        "Spent Time",
        "Sprint",
        "Assignee",
        "Title",
    ]);

    let rows = issues.iter().map(|issue| {
        let [issue_type, status, estimation, spent] =
            ISSUE_FIELD_COLUMNS.map(|name| cell(issue.field_text(name)));
        let sprint = cell(Some(issue.sprint_names().join(", ")));
        let assignee = issue.assignee_display();

        issue_row([
            &issue.id,
            &issue_type,
            &status,
            &estimation,
            &spent,
            &sprint,
            &assignee,
            &issue.summary,
        ])
    });

    std::iter::once(header).chain(rows).collect()
}

fn issue_row(cells: [&str; 8]) -> String {
    let [id, issue_type, status, estimation, spent, sprint, assignee, title] = cells;
    format!(
        "{id:<15}\t{issue_type:<10}\t{status:<15}\t{estimation:<12}\t{spent:<12}\t{sprint:<15}\t{assignee:<20}\t{title}\n"
    )
}

pub fn total_estimation_line(humanized: &str) -> String {
    format!("\nTotal Estimation: {humanized}")
}

pub fn boards_table(boards: &[Board]) -> String {
    let header = format!("{:<30}\t{}\n", "BOARD NAME", "ID");
    let rows = boards
        .iter()
        .map(|board| format!("{:<30}\t{}\n", board.name, board.id));

    std::iter::once(header).chain(rows).collect()
}

pub fn sprints_list(board: &str, sprints: &[Sprint]) -> String {
    let header = format!("Sprints in board '{board}':\n");
    let rows = sprints.iter().map(|sprint| format!("{}\n", sprint.name));

    std::iter::once(header).chain(rows).collect()
}

pub fn missing_work(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::from("All issues have work logged for today.\n");
    }

    let header = String::from("You have not logged work for the following issues today:\n");
    let rows = lines.iter().map(|line| format!("- {line}\n"));

    std::iter::once(header).chain(rows).collect()
}

pub fn config_summary(config: &Config) -> String {
    format!(
        "YouTrack URL: {}\nAPI Token: {}\nDefault Board: {}\nDefault Sprint: {}\nHours per Day: {}\n",
        config.url,
        config.masked_token(),
        config.board_name,
        config.default_sprint,
        config.hours_per_day
    )
}
