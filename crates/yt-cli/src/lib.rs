//! yt-cli library
//!
//! The HTTP client, command handlers and renderers behind the `yt` binary.

pub(crate) mod app;
pub(crate) mod board_commands;
pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod config_commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod output;
pub(crate) mod settings;
pub(crate) mod sprint_commands;
pub mod table;
pub(crate) mod work_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use error::{CliError, Result as CliResult};
pub use output::Output;

use crate::{
    board_commands::BoardCommands, commands::Commands, sprint_commands::SprintCommands,
    work_commands::WorkCommands,
};

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::Utc;
use yt_config::Config;

/// Load configuration, start logging and run the parsed command
pub async fn run(cli: Cli) -> CliResult<Output> {
    let path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let config = Config::load_from(&path)?;

    let colored = config.logging.colored && std::io::stderr().is_terminal();
    logger::initialize(
        logger::effective_level(*config.logging.level, cli.verbose),
        config.logging.file.as_ref().map(PathBuf::from),
        colored,
    )?;
    config.log_summary();

    let now = Utc::now();

    // Config commands must work even when the stored values are unusable
    match cli.command {
        Commands::Config { action } => settings::run(action, &path, &config, cli.json),
        Commands::List {
            sprint,
            assignee,
            issue_type,
            board,
        } => {
            connect(config, cli.json)?
                .list_issues(&sprint, &assignee, &issue_type, board.as_deref(), now)
                .await
        }
        Commands::Board { action } => match action {
            BoardCommands::List => connect(config, cli.json)?.list_boards().await,
        },
        Commands::Sprint { action } => match action {
            SprintCommands::List { board } => {
                connect(config, cli.json)?
                    .list_sprints(board.as_deref())
                    .await
            }
        },
        Commands::Work { action } => {
            let app = connect(config, cli.json)?;
            match action {
                WorkCommands::Add {
                    issue_id,
                    minutes,
                    description,
                } => app.add_work(&issue_id, minutes, &description).await,
                WorkCommands::Check => app.check_work(now).await,
            }
        }
    }
}

fn connect(config: Config, json: bool) -> CliResult<App> {
    config.validate()?;
    App::new(config, json)
}
