//! Status consistency invariant: the stored status is the one the board dictates.

use super::Invariant;
use crate::game::Game;
use crate::rules;
use crate::types::GameStatus;

/// Invariant: `status` agrees with the board contents.
///
/// `Won(mark)` requires a completed line of that mark. `Draw` requires a
/// full board with no winner. `InProgress` requires no winner and at
/// least one empty square.
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        match game.status() {
            GameStatus::InProgress => {
                rules::check_winner(game.board()).is_none() && !rules::is_full(game.board())
            }
            GameStatus::Won(mark) => rules::check_winner(game.board()) == Some(mark),
            GameStatus::Draw => rules::is_draw(game.board()),
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board contents"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Mark;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_won_game_holds() {
        let mut game = Game::new();
        for i in [0, 3, 1, 4, 2] {
            game.apply_move(Position::from_index(i).unwrap());
        }
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stale_in_progress_violates() {
        let mut game = Game::new();
        for i in [0, 3, 1, 4, 2] {
            game.apply_move(Position::from_index(i).unwrap());
        }

        // Pretend the win was never noticed
        game.status = GameStatus::InProgress;
        assert!(!StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_fabricated_win_violates() {
        let mut game = Game::new();
        game.status = GameStatus::Won(Mark::O);
        assert!(!StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut game = Game::new();
        game.apply_move(Position::Center);
        game.status = GameStatus::Draw;
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
