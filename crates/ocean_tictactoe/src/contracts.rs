//! Contract-based validation for moves.
//!
//! The precondition decides whether a move applies at all: moves that
//! fail it are silently ignored by [`crate::Game::apply_move`], and the
//! typed rejection only reaches the log. The postconditions formalize
//! what an applied move must preserve and run as debug assertions.

use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::types::{GameStatus, Square};

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Why a requested move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveRejection {}

/// Precondition: the game is in progress and the square is empty.
///
/// Checked in that order; a finished game ignores every position,
/// occupied or not.
pub fn legal_move(game: &Game, pos: Position) -> Result<(), MoveRejection> {
    if game.status().is_over() {
        return Err(MoveRejection::GameOver);
    }
    if !game.board().is_empty(pos) {
        return Err(MoveRejection::Occupied(pos));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Occupied squares never change between two observations of a game.
pub fn board_monotonic(before: &Game, after: &Game) -> bool {
    Position::ALL.iter().all(|&pos| match before.board().get(pos) {
        Square::Empty => true,
        occupied => after.board().get(pos) == occupied,
    })
}

/// An applied move flips the turn exactly when the game stays in progress.
pub fn turn_rule_holds(before: &Game, after: &Game) -> bool {
    match after.status() {
        GameStatus::InProgress => after.to_move() == before.to_move().other(),
        GameStatus::Won(_) | GameStatus::Draw => after.to_move() == before.to_move(),
    }
}

/// Asserts the move postconditions in debug builds.
///
/// Called by `apply_move` after every applied (not ignored) move.
pub fn assert_move_contract(before: &Game, after: &Game) {
    debug_assert!(
        board_monotonic(before, after),
        "occupied square changed:\n{}\n->\n{}",
        before.board(),
        after.board()
    );
    debug_assert!(
        turn_rule_holds(before, after),
        "turn rule violated: {:?} -> {:?} with status {:?}",
        before.to_move(),
        after.to_move(),
        after.status()
    );
    debug_assert!(
        GameInvariants::check_all(after).is_ok(),
        "invariant violated after move: {:?}",
        GameInvariants::check_all(after)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::new();
        assert!(legal_move(&game, Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::new();
        game.apply_move(Position::Center);

        assert_eq!(
            legal_move(&game, Position::Center),
            Err(MoveRejection::Occupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut game = Game::new();
        // X wins the top row
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.apply_move(pos);
        }
        assert!(game.is_over());

        // Even an empty square is rejected once the game ends
        assert_eq!(
            legal_move(&game, Position::BottomRight),
            Err(MoveRejection::GameOver)
        );
    }

    #[test]
    fn test_postconditions_hold_after_move() {
        let before = Game::new();
        let mut after = before;
        after.apply_move(Position::Center);

        assert!(board_monotonic(&before, &after));
        assert!(turn_rule_holds(&before, &after));
    }

    #[test]
    fn test_monotonicity_detects_corruption() {
        let mut before = Game::new();
        before.apply_move(Position::Center);

        let mut after = before;
        after.board.set(Position::Center, Square::Occupied(Mark::O));

        assert!(!board_monotonic(&before, &after));
    }

    #[test]
    fn test_turn_rule_detects_stuck_turn() {
        let before = Game::new();
        let mut after = before;
        after.board.set(Position::Center, Square::Occupied(Mark::X));
        // Turn left un-flipped while still in progress
        assert!(!turn_rule_holds(&before, &after));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(MoveRejection::GameOver.to_string(), "Game is already over");
        assert_eq!(
            MoveRejection::Occupied(Position::Center).to_string(),
            "Center is already occupied"
        );
    }
}
