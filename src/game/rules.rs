//! Win detection logic for tic-tac-toe.

use super::position::Position;
use super::types::{Board, Player, Square};
use derive_getters::Getters;
use tracing::instrument;

/// The 8 winning lines in priority order: rows top-to-bottom,
/// columns left-to-right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A decided game: who won, and along which line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Win {
    /// The winning player.
    player: Player,
    /// The three positions forming the winning line.
    line: [Position; 3],
}

/// Checks if there is a winner on the board.
///
/// Returns the first line (in [`LINES`] priority order) holding three
/// equal occupied squares, `None` otherwise. A full board with no line
/// is indistinguishable from an ongoing game here.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty
            && sq == board.get(b)
            && sq == board.get(c)
            && let Square::Occupied(player) = sq
        {
            return Some(Win { player, line });
        }
    }

    None
}
