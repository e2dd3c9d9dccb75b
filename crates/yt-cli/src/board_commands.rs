use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// List available agile boards
    List,
}
