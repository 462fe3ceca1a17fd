//! Status line and glyph mapping as rendered to players.

use ocean_tictactoe::{Game, Mark, Position, Square};

#[test]
fn test_initial_status_names_knight() {
    let game = Game::new();
    assert_eq!(game.status_text(), "Knight (Player 1) to move");
}

#[test]
fn test_status_alternates_roles() {
    let mut game = Game::new();
    game.apply_move(Position::Center);
    assert_eq!(game.status_text(), "Queen (Player 2) to move");

    game.apply_move(Position::TopLeft);
    assert_eq!(game.status_text(), "Knight (Player 1) to move");
}

#[test]
fn test_win_status_text() {
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        game.apply_move(pos);
    }

    assert_eq!(game.status_text(), "Knight (Player 1) wins!");
}

#[test]
fn test_queen_win_status_text() {
    let mut game = Game::new();
    for i in [0, 1, 3, 4, 8, 7] {
        game.apply_move(Position::from_index(i).unwrap());
    }

    assert_eq!(game.status_text(), "Queen (Player 2) wins!");
}

#[test]
fn test_draw_status_text() {
    let mut game = Game::new();
    for i in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
        game.apply_move(Position::from_index(i).unwrap());
    }

    assert_eq!(game.status_text(), "It’s a draw!");
}

#[test]
fn test_status_recomputes_after_reset() {
    let mut game = Game::new();
    for i in [0, 3, 1, 4, 2] {
        game.apply_move(Position::from_index(i).unwrap());
    }
    assert_eq!(game.status_text(), "Knight (Player 1) wins!");

    game.reset();
    assert_eq!(game.status_text(), "Knight (Player 1) to move");
}

#[test]
fn test_glyph_mapping() {
    assert_eq!(Mark::X.glyph(), "♞");
    assert_eq!(Mark::O.glyph(), "♛");
    assert_eq!(Square::Empty.glyph(), "");
    assert_eq!(Square::Occupied(Mark::X).glyph(), "♞");
    assert_eq!(Square::Occupied(Mark::O).glyph(), "♛");
}

#[test]
fn test_roles_and_short_names() {
    assert_eq!(Mark::X.role(), "Knight (Player 1)");
    assert_eq!(Mark::O.role(), "Queen (Player 2)");
    assert_eq!(Mark::X.to_string(), "X");
    assert_eq!(Mark::O.to_string(), "O");
    assert_eq!(Mark::X.other(), Mark::O);
    assert_eq!(Mark::O.other(), Mark::X);
}
