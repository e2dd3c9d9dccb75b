//! yt - YouTrack command-line assistant
//!
//! # Examples
//!
//! ```bash
//! # Issues assigned to me in the current sprint of the configured board
//! yt list
//!
//! # Bugs of a teammate in a given sprint
//! yt list -a bob -t Bug -s "Sprint 5" -b TeamBoard
//!
//! # Log 30 minutes of work
//! yt work add PRJ-123 30 "Code review"
//! ```

use yt_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await.and_then(|output| output.render(pretty)) {
        Ok(text) => {
            println!("{}", text.trim_end_matches('\n'));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
