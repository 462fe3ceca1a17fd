//! Mark balance invariant: X goes first, so counts stay within one.

use super::Invariant;
use crate::game::Game;
use crate::types::Mark;

/// Invariant: the board holds as many X marks as O marks, or one more.
///
/// X always moves first and marks are only ever added, so any reachable
/// board satisfies `o_count <= x_count <= o_count + 1`.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x_count = game.board().count(Mark::X);
        let o_count = game.board().count(Mark::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by exactly one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    #[test]
    fn test_empty_board_holds() {
        let game = Game::new();
        assert!(MarkBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_balance_holds_through_a_game() {
        let mut game = Game::new();
        for i in [4, 0, 8, 2, 3] {
            game.apply_move(Position::from_index(i).unwrap());
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_two_extra_x_violates() {
        let mut game = Game::new();
        game.board.set(Position::TopLeft, Square::Occupied(Mark::X));
        game.board.set(Position::TopRight, Square::Occupied(Mark::X));
        assert!(!MarkBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_o_leading_violates() {
        let mut game = Game::new();
        game.board.set(Position::Center, Square::Occupied(Mark::O));
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
