//! Replayable game state: board history and time-travel navigation.

use super::position::Position;
use super::rules::{Win, check_winner};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A tic-tac-toe game with full move history.
///
/// The history is an append-only list of board snapshots forming one
/// linear branch; `history[0]` is always the empty board. The viewed
/// move doubles as the play point: playing while viewing an earlier
/// move discards everything after it before appending.
///
/// Whose turn it is derives from the viewed index (even means X),
/// never from stored state. The mover for a play is read off the
/// viewed index before the append, so playing after a jump back to an
/// even index places X even when X also made the discarded move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots, one per move, starting from the empty board.
    history: Vec<Board>,
    /// Index of the snapshot currently viewed and played from.
    current_move: usize,
}

impl Game {
    /// Creates a new game with an empty board.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Returns the board history, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the currently viewed move.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the board at the currently viewed move.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Whether X moves next, derived from index parity.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Returns the player whose turn it is at the viewed move.
    pub fn to_move(&self) -> Player {
        if self.x_is_next() {
            Player::X
        } else {
            Player::O
        }
    }

    /// Checks the viewed board for a winner.
    ///
    /// Recomputed on every call; the result is never stored.
    pub fn winner(&self) -> Option<Win> {
        check_winner(self.current_board())
    }

    /// Plays the next move at the given position.
    ///
    /// Ignored (returning `false`) if the viewed board already has a
    /// winner or the square is occupied. Otherwise truncates any moves
    /// after the viewed one, appends the new snapshot, and advances to
    /// it. Returns `true` if the move was applied.
    #[instrument(skip(self), fields(position = %pos, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> bool {
        if self.winner().is_some() {
            debug!("Ignoring move: game already won");
            return false;
        }
        if !self.current_board().is_empty(pos) {
            debug!("Ignoring move: square occupied");
            return false;
        }

        let mut next = *self.current_board();
        next.set(pos, Square::Occupied(self.to_move()));

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(move_count = self.current_move, "Move applied");
        true
    }

    /// Jumps to the given move index without altering history.
    ///
    /// Ignored (returning `false`) if the index is out of range.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) -> bool {
        if move_index >= self.history.len() {
            debug!("Ignoring jump: index out of range");
            return false;
        }
        self.current_move = move_index;
        true
    }

    /// Resets the game to a single empty board, discarding all history.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.history = vec![Board::new()];
        self.current_move = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_has_single_empty_board() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(*game.current_board(), Board::new());
        assert!(game.x_is_next());
    }

    #[test]
    fn test_players_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert!(game.play(Position::Center));
        assert_eq!(game.to_move(), Player::O);
        assert!(game.play(Position::TopLeft));
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_history_grows_by_one_per_move() {
        let mut game = Game::new();
        game.play(Position::Center);
        game.play(Position::TopLeft);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_move(), 2);
    }

    #[test]
    fn test_jump_does_not_alter_history() {
        let mut game = Game::new();
        game.play(Position::Center);
        game.play(Position::TopLeft);
        assert!(game.jump_to(1));
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.history().len(), 3);
    }
}
