//! Exhaustive check that the computer never loses.
//!
//! Every legal human move is tried at every human turn, with the computer
//! answering through the same [`Session`] the terminal UI uses.

use tracing::{debug, info, instrument};
use unbeatable_core::{Outcome, Side};

use crate::session::{Session, SessionEvent};

/// Totals over every finished game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Distinct games played to the end.
    pub games: u64,
    /// Games the human won. Zero for a correct engine.
    pub player_wins: u64,
    /// Games the computer won.
    pub ai_wins: u64,
    /// Drawn games.
    pub draws: u64,
}

impl VerifyReport {
    /// Returns true if the human never won.
    pub fn computer_never_lost(&self) -> bool {
        self.player_wins == 0
    }
}

impl std::fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: {} player wins, {} AI wins, {} draws",
            self.games, self.player_wins, self.ai_wins, self.draws
        )
    }
}

/// Plays out the full game tree of human choices.
#[instrument]
pub fn verify() -> VerifyReport {
    let mut report = VerifyReport::default();
    explore(&Session::new(), &mut report);
    info!(%report, "Verification finished");
    report
}

fn explore(session: &Session, report: &mut VerifyReport) {
    let game = session.game();
    debug_assert_eq!(game.turn(), Side::Player);

    for position in game.board().empty_positions() {
        let mut next = session.clone();
        let outcome = match next.human_move(position) {
            Ok(SessionEvent::Moved { outcome, .. }) => outcome,
            Ok(SessionEvent::Ignored(err)) | Err(err) => {
                debug!(error = %err, ?position, "Unexpected rejection while exploring");
                continue;
            }
        };

        match outcome {
            Outcome::InProgress => explore(&next, report),
            Outcome::PlayerWin => report.player_wins += 1,
            Outcome::AiWin => report.ai_wins += 1,
            Outcome::Draw => report.draws += 1,
        }
        if outcome.is_over() {
            report.games += 1;
        }
    }
}
