//! Application state and logic.

use tracing::{debug, info, instrument, warn};
use unbeatable_core::{Outcome, Position, Side};

use super::input::{Action, move_cursor};
use crate::config::AppConfig;
use crate::session::{Session, SessionEvent};

/// Main application state.
pub struct App {
    session: Session,
    config: AppConfig,
    cursor: Position,
    hint: Option<Position>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: AppConfig) -> Self {
        let status_message = format!("{}'s turn. Pick a cell.", config.player_name());
        Self {
            session: Session::new(),
            config,
            cursor: Position::Center,
            hint: None,
            status_message,
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the highlighted hint, if one was requested for this turn.
    pub fn hint(&self) -> Option<Position> {
        self.hint
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Move(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::Select => self.play(self.cursor),
            Action::PlayAt(position) => {
                self.cursor = position;
                self.play(position);
            }
            Action::Hint => self.show_hint(),
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, position: Position) {
        let event = match self.session.human_move(position) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = format!("Move error: {}", e);
                return;
            }
        };

        match event {
            SessionEvent::Ignored(reason) => {
                debug!(%reason, "Input ignored");
            }
            SessionEvent::Moved { reply, outcome, .. } => {
                self.hint = None;
                self.status_message = match outcome {
                    Outcome::InProgress => match reply {
                        Some(reply) => format!(
                            "{} played {}. Your turn.",
                            self.config.ai_name(),
                            reply.position.label()
                        ),
                        None => format!("{}'s turn.", self.config.player_name()),
                    },
                    outcome => self.game_over_message(outcome),
                };
            }
        }
    }

    fn game_over_message(&self, outcome: Outcome) -> String {
        match outcome.winner() {
            Some(side) => format!(
                "{} wins! Press 'r' to restart or 'q' to quit.",
                self.config.name(side)
            ),
            None => "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string(),
        }
    }

    fn show_hint(&mut self) {
        self.hint = self.session.hint();
        if let Some(position) = self.hint {
            self.cursor = position;
            self.status_message = format!("Hint: {}", position.label());
        }
    }

    /// Restarts the game, keeping the score.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.restart();
        self.hint = None;
        self.cursor = Position::Center;
        self.status_message = format!(
            "Game restarted. {}'s turn.",
            self.config.name(Side::Player)
        );
    }
}
