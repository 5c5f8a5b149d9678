//! Command-line interface for tictactoe_replay.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe with move history and replay navigation.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Play tic-tac-toe and step back through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show the move list newest-first on startup.
    #[arg(long)]
    pub descending: bool,

    /// File to receive tracing output (stdout belongs to the TUI).
    #[arg(long, default_value = "tictactoe_replay.log")]
    pub log_file: PathBuf,
}
