//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two sides at the table.
///
/// The human always moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Side {
    /// The human player (moves first, marks `X`).
    Player,
    /// The computer opponent (marks `O`).
    Ai,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Outcome reported when this side completes a line.
    pub fn win(self) -> Outcome {
        match self {
            Side::Player => Outcome::PlayerWin,
            Side::Ai => Outcome::AiWin,
        }
    }

    /// Notation character for this side's mark.
    pub fn symbol(self) -> char {
        match self {
            Side::Player => 'X',
            Side::Ai => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a side's mark.
    Marked(Side),
}

impl Cell {
    /// Returns the side owning this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Marked(side) => Some(side),
        }
    }
}

/// Status of a game.
///
/// Exactly one outcome holds for any reachable board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// Moves can still be made.
    #[default]
    #[display("In progress")]
    InProgress,
    /// The human completed a line.
    #[display("Player wins")]
    PlayerWin,
    /// The computer completed a line.
    #[display("AI wins")]
    AiWin,
    /// Board filled with no line completed.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winning side, if the game ended in a win.
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWin => Some(Side::Player),
            Outcome::AiWin => Some(Side::Ai),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}
