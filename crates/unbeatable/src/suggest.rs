//! Best-move analysis for a position given in board notation.

use anyhow::{Context, Result, bail};
use tracing::instrument;
use unbeatable_core::{Board, Outcome, SearchResult, Side, rules, search};

/// Analysis of one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The parsed board.
    pub board: Board,
    /// Side the analysis is for.
    pub side: Side,
    /// Search output, or `None` if the game is already decided.
    pub result: Option<SearchResult>,
    /// Status of the board as given.
    pub outcome: Outcome,
}

/// Side to move implied by the mark counts; the player moves first.
pub fn side_to_move(board: &Board) -> Result<Side> {
    let player = board.count(Side::Player);
    let ai = board.count(Side::Ai);
    if player == ai {
        Ok(Side::Player)
    } else if player == ai + 1 {
        Ok(Side::Ai)
    } else {
        bail!(
            "Unreachable position: {} player marks against {} computer marks",
            player,
            ai
        )
    }
}

/// Parses `notation` and searches it for `side` (or the implied side).
#[instrument]
pub fn suggest(notation: &str, side: Option<Side>) -> Result<Suggestion> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("Invalid board {:?}", notation))?;
    let side = match side {
        Some(side) => side,
        None => side_to_move(&board)?,
    };

    let outcome = rules::evaluate(&board);
    let result = if outcome.is_over() {
        None
    } else {
        search(&board, side)
    };

    Ok(Suggestion {
        board,
        side,
        result,
        outcome,
    })
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        writeln!(f)?;
        let Some(result) = &self.result else {
            return write!(f, "No move: {}", self.outcome);
        };

        writeln!(f, "Best move for {}: {}", self.side, result.position)?;
        writeln!(f, "Score: {} ({} nodes searched)", result.score, result.nodes)?;
        for (position, score) in &result.candidates {
            writeln!(f, "  {:<14} {:>3}", position.label(), score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbeatable_core::Position;

    #[test]
    fn test_infers_computer_to_move() {
        let suggestion = suggest("X../.../...", None).unwrap();
        assert_eq!(suggestion.side, Side::Ai);
        let result = suggestion.result.unwrap();
        assert_eq!(result.position, Position::Center);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_finished_board_has_no_move() {
        let suggestion = suggest("XOX/XOO/OXX", None).unwrap();
        assert_eq!(suggestion.outcome, Outcome::Draw);
        assert!(suggestion.result.is_none());
        assert!(suggestion.to_string().contains("No move: Draw"));
    }

    #[test]
    fn test_unbalanced_board_rejected() {
        assert!(suggest("OO./.../...", None).is_err());
        // An explicit side skips the balance check.
        assert!(suggest("OO./.../...", Some(Side::Ai)).is_ok());
    }

    #[test]
    fn test_bad_notation_rejected() {
        let err = suggest("XQ./.../...", None).unwrap_err();
        assert!(err.to_string().contains("Invalid board"));
    }

    #[test]
    fn test_report_lists_candidates() {
        let text = suggest("XX./.O./...", None).unwrap().to_string();
        assert!(text.contains("Best move for Ai: Top-right (0, 2)"));
        assert!(text.contains("Bottom-right"));
    }
}
