//! The owned game-state component.
//!
//! [`Game`] holds the board, the turn flag, and the status, and exposes
//! the operations a front end drives: [`Game::apply_move`], [`Game::reset`],
//! and read accessors. Win and draw verdicts come from [`crate::rules`];
//! the status line comes from [`Game::status_text`] and is recomputed on
//! every call rather than cached.

use crate::contracts;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A complete tic-tac-toe game.
///
/// Starts with an empty board, X to move, in progress. Moves that are
/// invalid (square occupied, game already over) are ignored rather than
/// reported: in a click-driven UI such input needs no answer beyond the
/// unchanged screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) status: GameStatus,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that moves next.
    ///
    /// In terminal states this is the mark that made the final move;
    /// a game-ending move does not flip the turn.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning mark, if the game was won.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// True once the game has reached a win or a draw.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Status line for display, recomputed on every call.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{} to move", self.to_move.role()),
            GameStatus::Won(mark) => format!("{} wins!", mark.role()),
            GameStatus::Draw => "It’s a draw!".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Places the current mark at the given position.
    ///
    /// Ignored with no state change when the game is over or the square
    /// is occupied. A winning move sets `Won` and a board-filling move
    /// sets `Draw`; either leaves the turn flag as it was. Otherwise the
    /// turn flips to the other mark.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) {
        if let Err(rejection) = contracts::legal_move(self, pos) {
            debug!(%rejection, "move ignored");
            return;
        }
        let before = *self;

        self.board.set(pos, Square::Occupied(self.to_move));

        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.other();
        }

        debug!(board = %self.board, status = ?self.status, "move applied");
        contracts::assert_move_contract(&before, self);
    }

    /// Restores the initial state. Valid in any state, including mid-game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }
}
