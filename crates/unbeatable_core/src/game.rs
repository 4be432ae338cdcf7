//! Game state owned by a single session.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::{Board, Cell, Outcome, Position, Side, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete state of one game: board, side to move and outcome.
///
/// Mutated only through [`GameState::apply_move`] (or its typed variant
/// [`GameState::apply_at`]) and [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Side,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, player to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::Player,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Places `mark` at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Checked in order, and the state is unchanged on any error:
    /// - [`MoveError::OutOfBounds`] if either coordinate is not in `0..3`
    /// - [`MoveError::GameAlreadyOver`] once the outcome is decided
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    /// - [`MoveError::WrongTurn`] if `mark` is not the side to move
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Side) -> Result<(), MoveError> {
        let position = Position::from_coords(row, col).ok_or_else(|| {
            warn!(row, col, "Move outside the grid");
            MoveError::OutOfBounds { row, col }
        })?;

        if self.outcome.is_over() {
            return Err(MoveError::GameAlreadyOver(self.outcome));
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Cell already occupied");
            return Err(MoveError::CellOccupied(position));
        }

        if mark != self.turn {
            return Err(MoveError::WrongTurn(mark));
        }

        self.board.set(position, Cell::Marked(mark));
        let mv = Move::new(mark, position);
        debug!(%mv, "Move applied");
        self.history.push(mv);
        self.outcome = self.evaluate();

        if !self.outcome.is_over() {
            self.turn = self.turn.opponent();
        } else {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game finished");
        }

        debug_assert!(
            GameInvariants::check_all(&*self).is_ok(),
            "game invariants violated after {:?}",
            self.history.last()
        );

        Ok(())
    }

    /// Places the side to move's mark at `position`.
    pub fn apply_at(&mut self, position: Position) -> Result<(), MoveError> {
        self.apply_move(position.row(), position.col(), self.turn)
    }

    /// Recomputes the outcome from the board.
    ///
    /// Idempotent: repeated calls without an intervening move agree.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Returns the game to its initial configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Copy of the current board for search.
    pub fn snapshot(&self) -> Board {
        self.board
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    ///
    /// Once the game is over this is the side that made the final move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Returns the outcome recorded after the last move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the moves played since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.turn(), Side::Player);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.board().empty_count(), 9);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_apply_move_flips_turn() {
        let mut game = GameState::new();
        game.apply_move(1, 1, Side::Player).unwrap();
        assert_eq!(game.turn(), Side::Ai);
        assert_eq!(game.board().get(Position::Center), Cell::Marked(Side::Player));
        game.apply_move(0, 0, Side::Ai).unwrap();
        assert_eq!(game.turn(), Side::Player);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_move(3, 0, Side::Player),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            game.apply_move(0, 7, Side::Player),
            Err(MoveError::OutOfBounds { row: 0, col: 7 })
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_wrong_turn_is_rejected() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_move(0, 0, Side::Ai),
            Err(MoveError::WrongTurn(Side::Ai))
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_turn_stays_on_winner() {
        let mut game = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.apply_at(pos).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::PlayerWin);
        assert_eq!(game.turn(), Side::Player);
        assert_eq!(
            game.apply_at(Position::BottomLeft),
            Err(MoveError::GameAlreadyOver(Outcome::PlayerWin))
        );
    }
}
