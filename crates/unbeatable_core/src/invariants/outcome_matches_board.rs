//! The recorded outcome is the board's evaluation.

use super::Invariant;
use crate::GameState;

/// Invariant: the stored outcome equals a fresh evaluation of the board.
pub struct OutcomeMatchesBoardInvariant;

impl Invariant<GameState> for OutcomeMatchesBoardInvariant {
    fn holds(game: &GameState) -> bool {
        game.outcome() == game.evaluate()
    }

    fn description() -> &'static str {
        "Recorded outcome matches the board"
    }
}
