//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use unbeatable_core::Side;

/// Display and logging preferences.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name shown for the human.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Name shown for the computer.
    #[serde(default = "default_ai_name")]
    ai_name: String,

    /// Mark drawn for the human's cells.
    #[serde(default = "default_player_symbol")]
    player_symbol: char,

    /// Mark drawn for the computer's cells.
    #[serde(default = "default_ai_symbol")]
    ai_symbol: char,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_name() -> String {
    "Player".to_string()
}

fn default_ai_name() -> String {
    "AI".to_string()
}

fn default_player_symbol() -> char {
    'X'
}

fn default_ai_symbol() -> char {
    'O'
}

fn default_log_file() -> PathBuf {
    PathBuf::from("unbeatable.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            ai_name: default_ai_name(),
            player_symbol: default_player_symbol(),
            ai_symbol: default_ai_symbol(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::from_file(path)?;
            info!(player = %config.player_name, ai = %config.ai_name, "Config loaded");
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the two symbols can be told apart on the board.
    ///
    /// Digits are reserved for numbering empty cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for symbol in [self.player_symbol, self.ai_symbol] {
            if symbol.is_whitespace() || symbol.is_control() || symbol.is_ascii_digit() {
                return Err(ConfigError::new(format!(
                    "Symbol {:?} cannot be used as a mark",
                    symbol
                )));
            }
        }
        if self.player_symbol == self.ai_symbol {
            return Err(ConfigError::new(format!(
                "Player and AI share the symbol {:?}",
                self.player_symbol
            )));
        }
        Ok(())
    }

    /// Display name for a side.
    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::Player => &self.player_name,
            Side::Ai => &self.ai_name,
        }
    }

    /// Board symbol for a side.
    pub fn symbol(&self, side: Side) -> char {
        match side {
            Side::Player => self.player_symbol,
            Side::Ai => self.ai_symbol,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
