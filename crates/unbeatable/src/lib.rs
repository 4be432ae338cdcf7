//! Unbeatable - play tic-tac-toe against a computer that never loses.
//!
//! The game logic lives in `unbeatable_core`; this crate adds the command
//! line, configuration, logging, the running score and the terminal UI.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod scoreboard;
pub mod session;
pub mod suggest;
pub mod tui;
pub mod verify;

pub use config::{AppConfig, ConfigError};
pub use scoreboard::ScoreBoard;
pub use session::{Session, SessionEvent};
pub use verify::{VerifyReport, verify};
