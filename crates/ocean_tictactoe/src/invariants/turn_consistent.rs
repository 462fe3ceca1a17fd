//! Turn consistency invariant: the turn flag is determined by the state.

use super::Invariant;
use crate::game::Game;
use crate::types::{GameStatus, Mark};

/// Invariant: `to_move` matches board parity and terminal status.
///
/// While in progress, X is to move exactly when the mark counts are
/// equal. A game-ending move does not flip the turn, so `Won(mark)`
/// leaves `to_move == mark`, and a draw leaves X to move since the
/// ninth mark is always X's.
pub struct TurnConsistentInvariant;

impl Invariant<Game> for TurnConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let x_count = game.board().count(Mark::X);
        let o_count = game.board().count(Mark::O);

        match game.status() {
            GameStatus::InProgress => {
                if x_count == o_count {
                    game.to_move() == Mark::X
                } else {
                    game.to_move() == Mark::O
                }
            }
            GameStatus::Won(mark) => game.to_move() == mark,
            GameStatus::Draw => game.to_move() == Mark::X,
        }
    }

    fn description() -> &'static str {
        "Turn flag matches board parity and terminal status"
    }
}
