//! Tic-tac-toe domain: board types, win rules, and replayable state.

mod position;
mod replay;
mod rules;
mod types;

pub use position::Position;
pub use replay::Game;
pub use rules::{LINES, Win, check_winner};
pub use types::{Board, Player, Square};
