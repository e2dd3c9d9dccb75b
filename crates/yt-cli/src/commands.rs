use crate::{
    board_commands::BoardCommands, config_commands::ConfigCommands,
    sprint_commands::SprintCommands, work_commands::WorkCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List issues, filtered by assignee, type and sprint
    List {
        /// Sprint to list issues from (default: configured sprint, then auto-detected)
        #[arg(short, long, default_value = "")]
        sprint: String,

        /// Assignee: "me", "unassigned" or a user name
        #[arg(short, long, default_value = "")]
        assignee: String,

        /// Issue type, e.g. Task, Bug, Story
        #[arg(short = 't', long = "type", default_value = "")]
        issue_type: String,

        /// Board the sprint belongs to (default: configured board)
        #[arg(short, long)]
        board: Option<String>,
    },

    /// Agile board operations
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Sprint operations
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },

    /// Time tracking
    Work {
        #[command(subcommand)]
        action: WorkCommands,
    },

    /// Local configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}
