//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac::Player;
use tracing::{debug, info, instrument};

/// Display settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name shown for the first player (plays `X`).
    #[serde(default = "default_player1_name")]
    player1_name: String,

    /// Name shown for the second player (plays `O`).
    #[serde(default = "default_player2_name")]
    player2_name: String,

    /// Text printed after the player's name when asking for a move.
    #[serde(default = "default_prompt")]
    prompt: String,
}

#[instrument]
fn default_player1_name() -> String {
    "Player 1".to_string()
}

#[instrument]
fn default_player2_name() -> String {
    "Player 2".to_string()
}

#[instrument]
fn default_prompt() -> String {
    "> ".to_string()
}

impl SessionConfig {
    /// Creates a configuration with explicit player names and the default prompt.
    #[instrument(skip(player1_name, player2_name))]
    pub fn new(player1_name: impl Into<String>, player2_name: impl Into<String>) -> Self {
        Self {
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
            prompt: default_prompt(),
        }
    }

    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player1 = %config.player1_name,
            player2 = %config.player2_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Returns the configured display name for `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::Player1 => &self.player1_name,
            Player::Player2 => &self.player2_name,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(default_player1_name(), default_player2_name())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
