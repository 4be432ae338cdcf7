//! Unbeatable core - pure tic-tac-toe logic
//!
//! Two pieces, usable without any UI:
//!
//! - **GameState**: the board, the side to move and the outcome, mutated only
//!   by applying moves or resetting.
//! - **Search**: exhaustive minimax with alpha-beta pruning that picks the
//!   optimal move for either side.
//!
//! # Example
//!
//! ```
//! use unbeatable_core::{GameState, Outcome, Side, best_move};
//!
//! let mut game = GameState::new();
//! game.apply_move(0, 0, Side::Player)?;
//!
//! let reply = best_move(&game.snapshot(), Side::Ai).expect("board has room");
//! game.apply_move(reply.row(), reply.col(), Side::Ai)?;
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! # Ok::<(), unbeatable_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;
pub mod search;

pub use action::{Move, MoveError};
pub use board::{Board, LINES, ParseBoardError};
pub use game::GameState;
pub use position::Position;
pub use search::{SearchResult, best_move, search};
pub use types::{Cell, Outcome, Side};
