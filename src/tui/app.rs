//! Application state and key handling.

use crate::game::{Game, Position};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::input;

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The 3x3 board grid.
    Board,
    /// The move history list.
    Moves,
}

/// Display order of the move list.
///
/// A transient presentation preference; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SortOrder {
    /// Oldest move first (default).
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Main application state.
///
/// Owns the game aggregate plus purely local UI state: the board
/// cursor, the focused pane, the move-list selection, and the sort
/// order. Every key event mutates this synchronously; rendering reads
/// it back without side effects.
pub struct App {
    game: Game,
    cursor: Position,
    focus: Pane,
    sort: SortOrder,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given initial sort order.
    pub fn new(sort: SortOrder) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Pane::Board,
            sort,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Pane {
        self.focus
    }

    /// Gets the move-list sort order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Gets the move-list selection (an index into display order).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status text shown above the board.
    ///
    /// A full board with no winning line still reports the next
    /// player; no draw status is computed.
    pub fn status_line(&self) -> String {
        match self.game.winner() {
            Some(win) => format!("Winner: {}", win.player()),
            None => format!("Next player: {}", self.game.to_move()),
        }
    }

    /// Move indices in display order per the current sort.
    pub fn displayed_moves(&self) -> Vec<usize> {
        let moves = 0..self.game.history().len();
        match self.sort {
            SortOrder::Ascending => moves.collect(),
            SortOrder::Descending => moves.rev().collect(),
        }
    }

    /// Label for a move-list entry.
    ///
    /// The entry for the viewed move reads as plain text rather than a
    /// jump action, except move 0 which always stays jumpable.
    pub fn move_label(&self, move_index: usize) -> String {
        if move_index == 0 {
            "Go to game start".to_string()
        } else if move_index == self.game.current_move() {
            format!("You are at move #{move_index}")
        } else {
            format!("Go to move #{move_index}")
        }
    }

    /// Handles a key event, mutating state synchronously.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.selected = 0;
            }
            KeyCode::Char('s') => {
                self.sort = self.sort.toggled();
                debug!(sort = %self.sort, "Sort order toggled");
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Pane::Board => Pane::Moves,
                    Pane::Moves => Pane::Board,
                };
            }
            code => match self.focus {
                Pane::Board => self.handle_board_key(code),
                Pane::Moves => self.handle_moves_key(code),
            },
        }
        self.clamp_selection();
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.game.play(self.cursor);
            }
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.game.play(pos);
                }
            }
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                let last = self.game.history().len() - 1;
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Enter => self.jump_to_selected(),
            _ => {}
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(&move_index) = self.displayed_moves().get(self.selected) else {
            return;
        };
        // The current entry is inert, except move 0 which always jumps.
        if move_index == self.game.current_move() && move_index != 0 {
            return;
        }
        self.game.jump_to(move_index);
    }

    // Plays and restarts shrink the history; keep the selection valid.
    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.game.history().len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_arrows_move_cursor() {
        let mut app = App::new(SortOrder::Ascending);
        assert_eq!(app.cursor(), Position::Center);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.cursor(), Position::TopCenter);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.cursor(), Position::TopLeft);
        // No wrap at the edge.
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game().history().len(), 2);
        assert!(!app.game().current_board().is_empty(Position::Center));
    }

    #[test]
    fn test_digit_plays_square() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Char('1')));
        assert!(!app.game().current_board().is_empty(Position::TopLeft));
        app.handle_key(key(KeyCode::Char('9')));
        assert!(!app.game().current_board().is_empty(Position::BottomRight));
    }

    #[test]
    fn test_digits_only_play_with_board_focus() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Pane::Moves);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.game().history().len(), 1);
        assert!(app.game().current_board().is_empty(Position::TopLeft));
        // Back on the board pane the same key plays.
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.game().history().len(), 2);
    }

    #[test]
    fn test_sort_toggle_reverses_display_order() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.displayed_moves(), vec![0, 1, 2]);
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.sort(), SortOrder::Descending);
        assert_eq!(app.displayed_moves(), vec![2, 1, 0]);
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut app = App::new(SortOrder::Ascending);
        assert_eq!(app.focus(), Pane::Board);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Pane::Moves);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Pane::Board);
    }

    #[test]
    fn test_moves_pane_jump() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Tab));
        // Select move 1 and jump to it.
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game().current_move(), 1);
        // History untouched by the jump.
        assert_eq!(app.game().history().len(), 3);
    }

    #[test]
    fn test_current_entry_is_inert_except_start() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Tab));
        // Selection moves onto the current move (index 1).
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.move_label(1), "You are at move #1");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game().current_move(), 1);
        // Move 0 always jumps.
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game().current_move(), 0);
    }

    #[test]
    fn test_restart_resets_game_and_selection() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_selection_clamped_after_truncating_play() {
        let mut app = App::new(SortOrder::Ascending);
        for c in ['1', '2', '3', '4'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.selected(), 4);
        // Jump back to the start and play: history shrinks to 2 entries.
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Up));
        }
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.game().history().len(), 2);
        assert!(app.selected() < app.game().history().len());
    }

    #[test]
    fn test_status_line() {
        let mut app = App::new(SortOrder::Ascending);
        assert_eq!(app.status_line(), "Next player: X");
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.status_line(), "Next player: O");
        // X takes the top row with O interleaved in the middle row.
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('6')));
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.status_line(), "Winner: X");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(SortOrder::Ascending);
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }
}
