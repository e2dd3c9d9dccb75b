use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set a value: url, token, sprint, board, hours-per-day, timeout, log-level
    Set {
        key: String,
        value: String,
    },

    /// Print the stored configuration file
    View,

    /// Show the effective configuration with the token masked
    Show,
}
