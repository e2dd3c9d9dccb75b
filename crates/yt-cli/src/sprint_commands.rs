use clap::Subcommand;

#[derive(Subcommand)]
pub enum SprintCommands {
    /// List sprints of a board
    List {
        /// Board name (default: configured board)
        #[arg(short, long)]
        board: Option<String>,
    },
}
