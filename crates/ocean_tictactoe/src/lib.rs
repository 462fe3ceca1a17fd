//! Ocean tic-tac-toe - core game logic
//!
//! This library implements a self-contained tic-tac-toe state machine
//! for two players sharing one screen.
//!
//! # Architecture
//!
//! - **Game**: owned state component exposing `apply_move` and `reset`
//! - **Rules**: pure win and draw evaluation, shared by game and tests
//! - **Contracts**: move preconditions and debug-build postconditions
//! - **Invariants**: first-class, independently testable state properties
//!
//! # Example
//!
//! ```
//! use ocean_tictactoe::{Game, GameStatus, Mark, Position};
//!
//! let mut game = Game::new();
//! game.apply_move(Position::TopLeft);
//! game.apply_move(Position::Center);
//!
//! assert_eq!(game.to_move(), Mark::X);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.status_text(), "Knight (Player 1) to move");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod contracts;
mod game;
mod position;
mod types;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - game component
pub use game::Game;

// Crate-level exports - move validation
pub use contracts::{MoveRejection, legal_move};

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, GameStatus, Mark, Square};
