//! Running score across games in one process.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use unbeatable_core::Outcome;

/// Win and draw counters, kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    player_wins: u32,
    ai_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    /// Creates a scoreboard with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Returns false for an unfinished one.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::AiWin => self.ai_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return false,
        }
        debug!(?self, "Score updated");
        true
    }

    /// Games won by the human.
    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    /// Games won by the computer.
    pub fn ai_wins(&self) -> u32 {
        self.ai_wins
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.player_wins + self.ai_wins + self.draws
    }
}
