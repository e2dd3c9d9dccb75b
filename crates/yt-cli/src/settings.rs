//! `yt config` handlers; these never contact the tracker.

use crate::{config_commands::ConfigCommands, error::Result as CliResult, output::Output, table};

use std::path::Path;

use log::info;
use serde_json::json;
use yt_config::Config;

/// `effective` is the loaded config with env overrides; `set` and `view` work on the file itself
pub fn run(action: ConfigCommands, path: &Path, effective: &Config, json: bool) -> CliResult<Output> {
    match action {
        ConfigCommands::Set { key, value } => set(path, &key, &value, json),
        ConfigCommands::View => view(path, json),
        ConfigCommands::Show => Ok(show(effective, json)),
    }
}

fn set(path: &Path, key: &str, value: &str, json: bool) -> CliResult<Output> {
    let mut stored = Config::read_file(path)?;
    stored.set_value(key, value)?;
    stored.save_to(path)?;
    info!("Saved {} to {}", key, path.display());

    if json {
        return Ok(Output::Json(json!({ "key": key, "value": value })));
    }
    Ok(Output::Text(format!("Configuration updated: {key} = {value}")))
}

fn view(path: &Path, json: bool) -> CliResult<Output> {
    let stored = Config::read_file(path)?;

    if json {
        return Ok(Output::Json(serde_json::to_value(&stored)?));
    }
    Ok(Output::Text(stored.to_yaml()?))
}

fn show(config: &Config, json: bool) -> Output {
    if json {
        return Output::Json(json!({
            "url": config.url,
            "token": config.masked_token(),
            "board_name": config.board_name,
            "default_sprint": config.default_sprint,
            "hours_per_day": config.hours_per_day,
        }));
    }
    Output::Text(table::config_summary(config))
}
