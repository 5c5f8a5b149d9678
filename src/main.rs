//! Tic-Tac-Toe Replay - terminal edition.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe_replay::{Cli, SortOrder, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    info!("Starting Tic-Tac-Toe Replay");

    let sort = if cli.descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    tui::run(sort)
}

/// Logs go to a file so they do not interfere with the TUI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
