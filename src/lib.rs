//! Replayable tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Rules** ([`check_winner`]): pure win detection over a board
//!   snapshot, returning the winning player and line.
//! - **Game** ([`Game`]): the single state owner — an append-only
//!   history of board snapshots plus the index of the viewed move,
//!   with play, jump, and restart operations.
//! - **TUI** ([`tui`]): ratatui rendering and key handling; holds only
//!   transient presentation state (cursor, focus, sort order).
//!
//! Everything is synchronous and in-memory; nothing persists beyond
//! the session.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod game;
pub mod tui;

pub use cli::Cli;
pub use game::{Board, Game, LINES, Player, Position, Square, Win, check_winner};
pub use tui::{App, Pane, SortOrder};
