//! Player-facing settings for the terminal game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_rules::Mark;
use tracing::{debug, info, instrument};

/// Settings loaded from a TOML file and adjusted by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Draw marks in color.
    #[serde(default = "default_true")]
    color: bool,

    /// Emphasize the most recently placed mark.
    #[serde(default = "default_true")]
    highlight_last_move: bool,

    /// Clear the terminal before each board is drawn.
    #[serde(default = "default_true")]
    clear_screen: bool,

    /// Mark that moves first in every game.
    #[serde(default = "default_first_mark")]
    first_mark: Mark,
}

fn default_true() -> bool {
    true
}

fn default_first_mark() -> Mark {
    Mark::X
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: default_true(),
            highlight_last_move: default_true(),
            clear_screen: default_true(),
            first_mark: default_first_mark(),
        }
    }
}

impl Config {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, falling back to defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Sets whether marks are colored.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Sets whether the last move is highlighted.
    pub fn with_highlight_last_move(mut self, highlight: bool) -> Self {
        self.highlight_last_move = highlight;
        self
    }

    /// Sets whether the screen is cleared between turns.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Sets the mark that opens each game.
    pub fn with_first_mark(mut self, mark: Mark) -> Self {
        self.first_mark = mark;
        self
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
