use clap::Subcommand;

#[derive(Subcommand)]
pub enum WorkCommands {
    /// Add a work item to an issue
    Add {
        /// Issue ID, e.g. "PRJ-123"
        issue_id: String,

        /// Time spent, in minutes
        minutes: u64,

        /// What was done
        description: String,
    },

    /// Show your issues with no work logged today
    Check,
}
