//! Win detection logic for tic-tac-toe.

use super::super::{Board, Side};

/// Checks if either side has three in a row.
///
/// The player's lines are checked first. Both sides holding a line cannot
/// arise through legal play, so the order only matters for hand-built boards.
pub fn check_winner(board: &Board) -> Option<Side> {
    [Side::Player, Side::Ai]
        .into_iter()
        .find(|&side| board.has_line(side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Marked(Side::Player));
        board.set(Position::TopCenter, Cell::Marked(Side::Player));
        board.set(Position::TopRight, Cell::Marked(Side::Player));
        assert_eq!(check_winner(&board), Some(Side::Player));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Cell::Marked(Side::Ai));
        board.set(Position::Center, Cell::Marked(Side::Ai));
        board.set(Position::BottomLeft, Cell::Marked(Side::Ai));
        assert_eq!(check_winner(&board), Some(Side::Ai));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Marked(Side::Player));
        board.set(Position::TopCenter, Cell::Marked(Side::Player));
        board.set(Position::TopRight, Cell::Marked(Side::Ai));
        assert_eq!(check_winner(&board), None);
    }
}
