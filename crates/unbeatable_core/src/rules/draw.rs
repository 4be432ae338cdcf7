//! Full-board detection.

use super::super::Board;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
