//! One human-versus-computer session: the current game plus the score.
//!
//! The session drives the turn order. A human move is applied, and if the
//! game is still going the computer's reply is searched and applied at once,
//! so control always returns with the human to move or the game over.

use tracing::{debug, info, instrument, warn};
use unbeatable_core::{GameState, MoveError, Outcome, Position, SearchResult, Side, search};

use crate::scoreboard::ScoreBoard;

/// What a human move led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The input was dropped without touching the game.
    Ignored(MoveError),
    /// The human's mark was placed, possibly followed by the computer's.
    Moved {
        /// Where the human played.
        human: Position,
        /// The computer's reply, unless the human's move ended the game.
        reply: Option<SearchResult>,
        /// Outcome after both moves.
        outcome: Outcome,
    },
}

/// Owns the game and the running score.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: GameState,
    scores: ScoreBoard,
}

impl Session {
    /// Creates a session with a fresh game and zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the running score.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Plays the human's mark at `position`, then the computer's reply.
    ///
    /// Occupied cells and moves after the end are ignored rather than
    /// reported as errors. A finished game is scored exactly once.
    ///
    /// # Errors
    ///
    /// Only errors the UI should never be able to provoke are returned.
    #[instrument(skip(self), fields(position = ?position))]
    pub fn human_move(&mut self, position: Position) -> Result<SessionEvent, MoveError> {
        match self
            .game
            .apply_move(position.row(), position.col(), Side::Player)
        {
            Ok(()) => {}
            Err(err @ (MoveError::CellOccupied(_) | MoveError::GameAlreadyOver(_))) => {
                debug!(error = %err, "Ignoring move");
                return Ok(SessionEvent::Ignored(err));
            }
            Err(err) => {
                warn!(error = %err, "Move rejected");
                return Err(err);
            }
        }

        let reply = if self.game.is_over() {
            None
        } else {
            self.computer_move()?
        };

        let outcome = self.game.outcome();
        if outcome.is_over() {
            self.scores.record(outcome);
            info!(%outcome, "Game over");
        }

        Ok(SessionEvent::Moved {
            human: position,
            reply,
            outcome,
        })
    }

    /// Searches and applies the computer's move.
    fn computer_move(&mut self) -> Result<Option<SearchResult>, MoveError> {
        let Some(result) = search(&self.game.snapshot(), Side::Ai) else {
            return Ok(None);
        };
        let position = result.position;
        self.game
            .apply_move(position.row(), position.col(), Side::Ai)?;
        debug!(position = ?position, score = result.score, nodes = result.nodes, "Computer moved");
        Ok(Some(result))
    }

    /// Best move for the human, or `None` once the game is over.
    #[instrument(skip(self))]
    pub fn hint(&self) -> Option<Position> {
        if self.game.is_over() {
            return None;
        }
        search(&self.game.snapshot(), Side::Player).map(|result| result.position)
    }

    /// Starts a new game. The score is kept.
    pub fn restart(&mut self) {
        self.game.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbeatable_core::Cell;

    #[test]
    fn test_human_move_gets_a_reply() {
        let mut session = Session::new();
        let event = session.human_move(Position::TopLeft).unwrap();

        match event {
            SessionEvent::Moved {
                human,
                reply,
                outcome,
            } => {
                assert_eq!(human, Position::TopLeft);
                assert_eq!(reply.map(|r| r.position), Some(Position::Center));
                assert_eq!(outcome, Outcome::InProgress);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(session.game().turn(), Side::Player);
        assert_eq!(session.game().history().len(), 2);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut session = Session::new();
        session.human_move(Position::TopLeft).unwrap();
        let before = session.game().clone();

        let event = session.human_move(Position::Center).unwrap();
        assert_eq!(
            event,
            SessionEvent::Ignored(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn test_restart_keeps_score() {
        let mut session = Session::new();
        // Corners the computer can exploit: it wins before the board fills.
        for pos in [
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
            Position::BottomLeft,
            Position::MiddleLeft,
        ] {
            if session.game().is_over() {
                break;
            }
            session.human_move(pos).unwrap();
        }
        assert!(session.game().is_over());
        assert_eq!(session.scores().games(), 1);
        assert_eq!(session.scores().player_wins(), 0);

        let event = session.human_move(Position::TopCenter).unwrap();
        assert!(matches!(
            event,
            SessionEvent::Ignored(MoveError::GameAlreadyOver(_))
        ));
        assert_eq!(session.scores().games(), 1);

        session.restart();
        assert_eq!(session.game(), &GameState::new());
        assert_eq!(session.scores().games(), 1);
    }

    #[test]
    fn test_hint_blocks_threat() {
        let mut session = Session::new();
        session.human_move(Position::TopLeft).unwrap();
        session.human_move(Position::BottomRight).unwrap();

        // The computer now holds the top-center and center cells.
        let board = session.game().board();
        assert_eq!(board.get(Position::Center), Cell::Marked(Side::Ai));
        assert_eq!(board.get(Position::TopCenter), Cell::Marked(Side::Ai));
        assert_eq!(session.hint(), Some(Position::BottomCenter));
    }

    #[test]
    fn test_no_hint_after_game_over() {
        let mut session = Session::new();
        for position in [Position::TopLeft, Position::BottomRight, Position::TopRight] {
            session.human_move(position).unwrap();
        }
        assert!(session.game().is_over());
        assert_eq!(session.hint(), None);
    }
}
