//! End-to-end command handler tests against a mock tracker

use yt_cli::{App, CliError, Output};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};
use yt_config::Config;

/// 2025-06-15 12:00:00 UTC
const NOON_MS: i64 = 1_749_988_800_000;
const HOUR_MS: i64 = 3_600_000;

fn now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(NOON_MS).unwrap()
}

fn config_for(server: &MockServer) -> Config {
    Config {
        url: server.uri(),
        token: String::from("perm:test-token"),
        board_name: String::from("TeamBoard"),
        ..Config::default()
    }
}

fn text(output: Output) -> String {
    match output {
        Output::Text(text) => text,
        Output::Json(value) => panic!("expected text output, got {value}"),
    }
}

async fn mount_sprint_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/agiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "108-4", "name": "TeamBoard"}
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/agiles/108-4/sprints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "s1", "name": "Sprint 1", "isCurrent": false},
            {"id": "s2", "name": "Sprint 2", "isCurrent": true}
        ])))
        .mount(server)
        .await;
}

async fn mount_issues(server: &MockServer, query: &str) {
    Mock::given(method("GET"))
        .and(path("/api/issues"))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "idReadable": "PRJ-1",
                "summary": "Fix login",
                "customFields": [{"name": "Estimation", "value": {"presentation": "1d"}}]
            },
            {
                "idReadable": "PRJ-2",
                "summary": "Write docs",
                "customFields": [{"name": "Estimation", "value": {"presentation": "10m"}}]
            }
        ])))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/issues/PRJ-1/sprints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/issues/PRJ-2/sprints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

#[test]
fn test_app_requires_url_and_token() {
    let result = App::new(Config::default(), false);
    assert!(matches!(result, Err(CliError::Config(_))));
}

#[tokio::test]
async fn test_list_issues_with_explicit_sprint_skips_discovery() {
    let mock_server = MockServer::start().await;
    mount_issues(&mock_server, "for:me Board TeamBoard: {Sprint 9}").await;

    let app = App::new(config_for(&mock_server), false).unwrap();
    let output = app
        .list_issues("Sprint 9", "", "", None, now())
        .await
        .unwrap();

    let text = text(output);
    assert!(text.contains("PRJ-1"));
    assert!(text.ends_with("Total Estimation: 1d 10m"));
}

#[tokio::test]
async fn test_list_issues_discovers_current_sprint() {
    let mock_server = MockServer::start().await;
    mount_sprint_listing(&mock_server).await;
    mount_issues(&mock_server, "for:me Board TeamBoard: {Sprint 2}").await;

    let app = App::new(config_for(&mock_server), false).unwrap();
    let output = app.list_issues("", "", "", None, now()).await.unwrap();

    assert!(text(output).contains("Write docs"));
}

#[tokio::test]
async fn test_list_issues_without_board_drops_sprint_filter() {
    let mock_server = MockServer::start().await;
    mount_issues(&mock_server, "for:me Type: Bug").await;

    let config = Config {
        board_name: String::new(),
        default_sprint: String::from("Sprint 3"),
        ..config_for(&mock_server)
    };
    let app = App::new(config, false).unwrap();
    let output = app.list_issues("", "me", "Bug", None, now()).await.unwrap();

    assert!(text(output).contains("PRJ-2"));
}

#[tokio::test]
async fn test_list_issues_json_reports_total() {
    let mock_server = MockServer::start().await;
    mount_issues(&mock_server, "for:me Board TeamBoard: {Sprint 9}").await;

    let app = App::new(config_for(&mock_server), true).unwrap();
    let output = app
        .list_issues("Sprint 9", "", "", None, now())
        .await
        .unwrap();

    let Output::Json(value) = output else {
        panic!("expected JSON output");
    };
    assert_eq!(value["sprint"], "Sprint 9");
    assert_eq!(value["total_estimation_minutes"], 370);
    assert_eq!(value["total_estimation"], "1d 10m");
    assert_eq!(value["issues"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_sprints_requires_board() {
    let mock_server = MockServer::start().await;
    let config = Config {
        board_name: String::new(),
        ..config_for(&mock_server)
    };

    let app = App::new(config, false).unwrap();
    let err = app.list_sprints(None).await.unwrap_err();

    assert!(err.to_string().contains("board name not specified"));
}

#[tokio::test]
async fn test_list_sprints_prints_names() {
    let mock_server = MockServer::start().await;
    mount_sprint_listing(&mock_server).await;

    let app = App::new(config_for(&mock_server), false).unwrap();
    let output = app.list_sprints(Some("TeamBoard")).await.unwrap();

    assert_eq!(
        text(output),
        "Sprints in board 'TeamBoard':\nSprint 1\nSprint 2\n"
    );
}

#[tokio::test]
async fn test_add_work_confirms() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/issues/PRJ-1/timeTracking/workItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "date": NOON_MS,
            "duration": {"minutes": 45},
            "text": "Pairing"
        })))
        .mount(&mock_server)
        .await;

    let app = App::new(config_for(&mock_server), false).unwrap();
    let output = app.add_work("PRJ-1", 45, "Pairing").await.unwrap();

    assert_eq!(text(output), "Work item added successfully.");
}

#[tokio::test]
async fn test_check_work_lists_issues_without_todays_work() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/issues"))
        .and(query_param("query", "for:me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"idReadable": "PRJ-1", "summary": "Logged today"},
            {"idReadable": "PRJ-2", "summary": "Logged yesterday"},
            {"idReadable": "PRJ-3", "summary": "Unreachable"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/issues/PRJ-1/timeTracking/workItems"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"date": NOON_MS - 2 * HOUR_MS}])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/issues/PRJ-2/timeTracking/workItems"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"date": NOON_MS - 24 * HOUR_MS}])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/issues/PRJ-3/timeTracking/workItems"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let app = App::new(config_for(&mock_server), false).unwrap();
    let output = app.check_work(now()).await.unwrap();

    assert_eq!(
        text(output),
        "You have not logged work for the following issues today:\n- PRJ-2: Logged yesterday\n"
    );
}

#[tokio::test]
async fn test_check_work_all_logged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/issues"))
        .and(query_param("query", "for:me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let app = App::new(config_for(&mock_server), false).unwrap();
    let output = app.check_work(now()).await.unwrap();

    assert_eq!(text(output), "All issues have work logged for today.\n");
}
