//! Tracker-facing command handlers.

use crate::{Client, error::Result as CliResult, output::Output, table};

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde_json::json;
use yt_config::Config;
use yt_core::{
    CoreError, CoreResult, DurationCodec, QueryFilter, SprintPlan, SprintRequest, SprintResolver,
    build_query, issues_without_work_on,
};

/// Everything a remote command needs, built once from the loaded config
pub struct App {
    client: Client,
    config: Config,
    codec: DurationCodec,
    resolver: SprintResolver,
    json: bool,
}

impl App {
    /// Fails when the URL or token is missing, before any request is made
    pub fn new(config: Config, json: bool) -> CliResult<Self> {
        config.validate_remote()?;
        let codec = DurationCodec::new(config.hours_per_day)?;
        let client = Client::new(&config.url, &config.token)
            .with_timeout(Duration::from_secs(config.timeout_secs));

        Ok(Self {
            client,
            config,
            codec,
            resolver: SprintResolver::new(),
            json,
        })
    }

    /// Flag value when given, else the configured board (possibly empty)
    fn board<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.filter(|board| !board.is_empty())
            .unwrap_or(self.config.board_name.as_str())
    }

    /// Name the sprint to filter on, listing the board's sprints only when no name is known
    pub async fn resolve_sprint(
        &self,
        explicit: &str,
        board: &str,
        now: DateTime<Utc>,
    ) -> CoreResult<String> {
        let request = SprintRequest {
            explicit,
            configured_default: &self.config.default_sprint,
            board,
        };

        match self.resolver.plan(&request)? {
            SprintPlan::Named(name) => Ok(name),
            SprintPlan::Discover { board } => {
                let listing = self.client.list_sprints(&board).await;
                self.resolver.pick(&board, listing, now.timestamp_millis())
            }
        }
    }

    pub async fn list_issues(
        &self,
        sprint: &str,
        assignee: &str,
        issue_type: &str,
        board: Option<&str>,
        now: DateTime<Utc>,
    ) -> CliResult<Output> {
        let board = self.board(board);

        let sprint = match self.resolve_sprint(sprint, board, now).await {
            Ok(name) => {
                info!("Using sprint '{}'", name);
                name
            }
            Err(e) => {
                warn!("Could not determine sprint, listing without sprint filter: {}", e);
                String::new()
            }
        };

        let build = build_query(&QueryFilter {
            assignee,
            issue_type,
            sprint: &sprint,
            board,
        });
        for diagnostic in &build.diagnostics {
            warn!("{}", diagnostic);
        }

        let issues = self.client.fetch_issues(&build.query).await?;
        let total = self.codec.sum_estimations(&issues);
        let humanized = self.codec.humanize(total);

        if self.json {
            return Ok(Output::Json(json!({
                "query": build.query,
                "sprint": (!sprint.is_empty()).then_some(sprint),
                "issues": serde_json::to_value(&issues)?,
                "total_estimation_minutes": total,
                "total_estimation": humanized,
            })));
        }

        let mut text = table::issues_table(&issues);
        text.push_str(&table::total_estimation_line(&humanized));
        Ok(Output::Text(text))
    }

    pub async fn list_boards(&self) -> CliResult<Output> {
        let boards = self.client.list_boards().await?;

        if self.json {
            return Ok(Output::Json(serde_json::to_value(&boards)?));
        }
        Ok(Output::Text(table::boards_table(&boards)))
    }

    pub async fn list_sprints(&self, board: Option<&str>) -> CliResult<Output> {
        let board = self.board(board);
        if board.is_empty() {
            return Err(CoreError::configuration(
                "board name not specified, pass --board or run `yt config set board <name>`",
            )
            .into());
        }

        let sprints = self.client.list_sprints(board).await?;

        if self.json {
            return Ok(Output::Json(json!({
                "board": board,
                "sprints": serde_json::to_value(&sprints)?,
            })));
        }
        Ok(Output::Text(table::sprints_list(board, &sprints)))
    }

    pub async fn add_work(
        &self,
        issue_id: &str,
        minutes: u64,
        description: &str,
    ) -> CliResult<Output> {
        let item = self
            .client
            .add_work_item(issue_id, minutes, description)
            .await?;
        info!("Logged {} on {}", self.codec.humanize(minutes), issue_id);

        if self.json {
            return Ok(Output::Json(serde_json::to_value(&item)?));
        }
        Ok(Output::Text(String::from("Work item added successfully.")))
    }

    /// Report own issues with nothing logged on `now`'s UTC day
    pub async fn check_work(&self, now: DateTime<Utc>) -> CliResult<Output> {
        let today = now.date_naive();
        let issues = self.client.my_issues().await?;

        let mut entries = Vec::with_capacity(issues.len());
        for issue in issues {
            match self.client.work_items(&issue.id).await {
                Ok(items) => entries.push((issue, items)),
                Err(e) => warn!("Could not fetch work items for issue {}: {}", issue.id, e),
            }
        }

        let missing = issues_without_work_on(&entries, today);

        if self.json {
            return Ok(Output::Json(json!({
                "date": today.to_string(),
                "missing": missing,
            })));
        }
        Ok(Output::Text(table::missing_work(&missing)))
    }
}
