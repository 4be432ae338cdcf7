//! Game rules: line detection and terminal status.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board.
///
/// Checked in order: a player line, a computer line, a full board.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return winner.win();
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
