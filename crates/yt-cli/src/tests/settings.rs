use crate::config_commands::ConfigCommands;
use crate::{CliError, Output, settings};

use tempfile::TempDir;
use yt_config::Config;

fn set(key: &str, value: &str) -> ConfigCommands {
    ConfigCommands::Set {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn text(output: Output) -> String {
    match output {
        Output::Text(text) => text,
        Output::Json(value) => panic!("expected text output, got {value}"),
    }
}

fn stored_config() -> Config {
    Config {
        url: String::from("https://stored.youtrack.cloud"),
        token: String::from("perm:stored-token-1234"),
        board_name: String::from("StoredBoard"),
        ..Config::default()
    }
}

#[test]
fn test_set_creates_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("youtrack-cli.yaml");

    let output = settings::run(set("board", "TeamBoard"), &path, &Config::default(), false).unwrap();

    assert_eq!(text(output), "Configuration updated: board = TeamBoard");
    let saved = Config::read_file(&path).unwrap();
    assert_eq!(saved.board_name, "TeamBoard");
}

#[test]
fn test_set_keeps_other_stored_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("youtrack-cli.yaml");
    stored_config().save_to(&path).unwrap();

    settings::run(set("sprint", "Sprint 5"), &path, &Config::default(), false).unwrap();

    let saved = Config::read_file(&path).unwrap();
    assert_eq!(saved.default_sprint, "Sprint 5");
    assert_eq!(saved.url, "https://stored.youtrack.cloud");
    assert_eq!(saved.board_name, "StoredBoard");
}

#[test]
fn test_set_writes_file_not_effective_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("youtrack-cli.yaml");
    stored_config().save_to(&path).unwrap();
    let effective = Config {
        url: String::from("https://env.youtrack.cloud"),
        ..stored_config()
    };

    settings::run(set("board", "Other"), &path, &effective, false).unwrap();

    let saved = Config::read_file(&path).unwrap();
    assert_eq!(saved.url, "https://stored.youtrack.cloud");
}

#[test]
fn test_set_unknown_key_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("youtrack-cli.yaml");

    let result = settings::run(set("colour", "blue"), &path, &Config::default(), false);

    assert!(matches!(result, Err(CliError::Config(_))));
    assert!(!path.exists());
}

#[test]
fn test_set_json_echoes_key_and_value() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("youtrack-cli.yaml");

    let output = settings::run(set("timeout", "30"), &path, &Config::default(), true).unwrap();

    let Output::Json(value) = output else {
        panic!("expected JSON output");
    };
    assert_eq!(value["key"], "timeout");
    assert_eq!(value["value"], "30");
}

#[test]
fn test_view_shows_stored_file_not_effective_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("youtrack-cli.yaml");
    stored_config().save_to(&path).unwrap();
    let effective = Config {
        url: String::from("https://env.youtrack.cloud"),
        ..stored_config()
    };

    let yaml = text(settings::run(ConfigCommands::View, &path, &effective, false).unwrap());

    assert!(yaml.contains("https://stored.youtrack.cloud"));
    assert!(!yaml.contains("https://env.youtrack.cloud"));
}

#[test]
fn test_view_missing_file_shows_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.yaml");

    let output = settings::run(ConfigCommands::View, &path, &stored_config(), true).unwrap();

    let Output::Json(value) = output else {
        panic!("expected JSON output");
    };
    assert_eq!(value["url"], "");
    assert_eq!(value["hours_per_day"], 6);
}

#[test]
fn test_show_uses_effective_config_and_masks_token() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("youtrack-cli.yaml");
    stored_config().save_to(&path).unwrap();
    let effective = Config {
        url: String::from("https://env.youtrack.cloud"),
        ..stored_config()
    };

    let summary = text(settings::run(ConfigCommands::Show, &path, &effective, false).unwrap());

    assert!(summary.contains("YouTrack URL: https://env.youtrack.cloud"));
    assert!(summary.contains("API Token: perm...1234"));
    assert!(!summary.contains("stored-token"));
}

#[test]
fn test_show_json_masks_token() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("youtrack-cli.yaml");

    let output = settings::run(ConfigCommands::Show, &path, &stored_config(), true).unwrap();

    let Output::Json(value) = output else {
        panic!("expected JSON output");
    };
    assert_eq!(value["token"], "perm...1234");
    assert_eq!(value["board_name"], "StoredBoard");
    assert_eq!(value["hours_per_day"], 6);
}
