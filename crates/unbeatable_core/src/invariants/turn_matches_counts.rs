//! The side to move follows from the mark counts.

use super::Invariant;
use crate::{GameState, Side};

/// Invariant: turn agrees with the mark counts.
///
/// In progress, equal counts mean the player moves next. Once the game is
/// over the turn stays with whoever moved last, so equal counts mean the
/// computer finished it.
pub struct TurnMatchesCountsInvariant;

impl Invariant<GameState> for TurnMatchesCountsInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let equal = board.count(Side::Player) == board.count(Side::Ai);
        let expected = if equal != game.is_over() {
            Side::Player
        } else {
            Side::Ai
        };
        game.turn() == expected
    }

    fn description() -> &'static str {
        "Side to move matches the number of marks on the board"
    }
}
