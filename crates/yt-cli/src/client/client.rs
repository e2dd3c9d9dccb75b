use crate::{CliClientResult, ClientError};

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use yt_core::{Board, Issue, IssueHeader, Sprint, WorkItem};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const BOARD_FIELDS: &str = "id,name";
const SPRINT_FIELDS: &str = "id,name,isCurrent,start,finish,archived";
const ISSUE_FIELDS: &str = "idReadable,summary,customFields(name,value(login,fullName,presentation,name)),assignee(fullName,login)";
const ISSUE_SPRINT_FIELDS: &str = "id,name";
const ISSUE_HEADER_FIELDS: &str = "idReadable,summary,updated";
const WORK_ITEM_DATE_FIELDS: &str = "date";
const WORK_ITEM_FIELDS: &str = "date,duration(minutes),author(login),text";

/// HTTP client for the tracker REST API
pub struct Client {
    pub base_url: String,
    token: String,
    timeout: Duration,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Tracker URL (e.g., "https://example.youtrack.cloud")
    /// * `token` - Permanent token sent as `Authorization: Bearer`
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            timeout: DEFAULT_TIMEOUT,
            client: ReqwestClient::new(),
        }
    }

    /// Per-request timeout; the only time limit the client applies
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build an authenticated JSON request
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        self.client
            .request(method, &url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
    }

    /// Execute request and decode the body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body)
                .or_else(|| status.canonical_reason().map(String::from))
                .unwrap_or_else(|| String::from("Unknown error"));
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Board Operations
    // =========================================================================

    /// List all agile boards
    pub async fn list_boards(&self) -> CliClientResult<Vec<Board>> {
        let req = self
            .request(Method::GET, "/api/agiles")
            .query(&[("fields", BOARD_FIELDS)]);
        self.execute(req).await
    }

    /// Find a board by exact name
    pub async fn find_board(&self, name: &str) -> CliClientResult<Board> {
        self.list_boards()
            .await?
            .into_iter()
            .find(|board| board.name == name)
            .ok_or_else(|| ClientError::not_found(format!("board '{}' not found", name)))
    }

    // =========================================================================
    // Sprint Operations
    // =========================================================================

    /// List sprints of the board called `board_name`
    pub async fn list_sprints(&self, board_name: &str) -> CliClientResult<Vec<Sprint>> {
        let board = self.find_board(board_name).await?;
        let req = self
            .request(Method::GET, &format!("/api/agiles/{}/sprints", board.id))
            .query(&[("fields", SPRINT_FIELDS)]);
        self.execute(req).await
    }

    /// Sprints an issue belongs to
    pub async fn issue_sprints(&self, issue_id: &str) -> CliClientResult<Vec<Sprint>> {
        let req = self
            .request(Method::GET, &format!("/api/issues/{}/sprints", issue_id))
            .query(&[("fields", ISSUE_SPRINT_FIELDS)]);
        self.execute(req).await
    }

    // =========================================================================
    // Issue Operations
    // =========================================================================

    /// Fetch issues matching a filter expression, then attach their sprints.
    ///
    /// A failed sprint lookup only logs a warning; the issue is kept without sprints.
    pub async fn fetch_issues(&self, query: &str) -> CliClientResult<Vec<Issue>> {
        let req = self
            .request(Method::GET, "/api/issues")
            .query(&[("fields", ISSUE_FIELDS), ("query", query)]);
        let mut issues: Vec<Issue> = self.execute(req).await?;

        for issue in &mut issues {
            match self.issue_sprints(&issue.id).await {
                Ok(sprints) => issue.sprints = sprints,
                Err(e) => warn!("Could not fetch sprints for issue {}: {}", issue.id, e),
            }
        }

        Ok(issues)
    }

    /// Issues assigned to the token owner, slim shape
    pub async fn my_issues(&self) -> CliClientResult<Vec<IssueHeader>> {
        let req = self
            .request(Method::GET, "/api/issues")
            .query(&[("fields", ISSUE_HEADER_FIELDS), ("query", "for:me")]);
        self.execute(req).await
    }

    // =========================================================================
    // Work Item Operations
    // =========================================================================

    /// Work items of an issue (dates only)
    pub async fn work_items(&self, issue_id: &str) -> CliClientResult<Vec<WorkItem>> {
        let req = self
            .request(
                Method::GET,
                &format!("/api/issues/{}/timeTracking/workItems", issue_id),
            )
            .query(&[("fields", WORK_ITEM_DATE_FIELDS)]);
        self.execute(req).await
    }

    /// Log `minutes` of work on an issue
    pub async fn add_work_item(
        &self,
        issue_id: &str,
        minutes: u64,
        description: &str,
    ) -> CliClientResult<WorkItem> {
        #[derive(Serialize)]
        struct DurationValue {
            presentation: String,
        }

        #[derive(Serialize)]
        struct CreateWorkItemRequest<'a> {
            duration: DurationValue,
            text: &'a str,
        }

        let body = CreateWorkItemRequest {
            duration: DurationValue {
                presentation: format!("{}m", minutes),
            },
            text: description,
        };

        let req = self
            .request(
                Method::POST,
                &format!("/api/issues/{}/timeTracking/workItems", issue_id),
            )
            .query(&[("fields", WORK_ITEM_FIELDS)])
            .json(&body);
        self.execute(req).await
    }
}

/// The tracker's `error_description` / `error` text, or the raw body
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        return Some(trimmed.to_string());
    };

    ["error_description", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(String::from)
        .or_else(|| Some(trimmed.to_string()))
}
