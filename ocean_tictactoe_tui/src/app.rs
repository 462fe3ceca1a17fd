//! Application state and input dispatch.

use crossterm::event::KeyCode;
use ocean_tictactoe::{Game, Position};
use tracing::debug;

use crate::input;

/// Main application state.
///
/// Holds the game and the keyboard cursor. The status line is not stored
/// here; the renderer asks the game for it on every frame.
pub struct App {
    game: Game,
    cursor: Position,
    ascii: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(ascii: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            ascii,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether marks render as plain letters.
    pub fn ascii(&self) -> bool {
        self.ascii
    }

    /// Handles a key press. Returns false when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = input::position_for_digit(c) {
                    self.play(pos);
                }
            }
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
        true
    }

    /// Handles a left click on the given cell.
    pub fn click(&mut self, pos: Position) {
        self.cursor = pos;
        self.play(pos);
    }

    fn play(&mut self, pos: Position) {
        debug!(position = %pos, "input move");
        self.game.apply_move(pos);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.game.reset();
    }
}
