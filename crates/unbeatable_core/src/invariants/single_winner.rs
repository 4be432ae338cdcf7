//! At most one side holds a completed line.

use super::Invariant;
use crate::{GameState, Side};

/// Invariant: the two sides never both complete a line.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        !(board.has_line(Side::Player) && board.has_line(Side::Ai))
    }

    fn description() -> &'static str {
        "At most one side completes a line"
    }
}
