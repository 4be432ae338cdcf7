//! Mark balance: the player is never behind, and never more than one ahead.

use super::Invariant;
use crate::{GameState, Side};

/// Invariant: player marks minus computer marks is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let player = board.count(Side::Player);
        let ai = board.count(Side::Ai);
        player == ai || player == ai + 1
    }

    fn description() -> &'static str {
        "Player marks equal or exceed computer marks by one"
    }
}
