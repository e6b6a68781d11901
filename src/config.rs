//! Game configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::games::tictactoe::Figure;

/// Top-level configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The local human, who always moves first.
    player: PlayerConfig,
    /// The second human in player-vs-player mode.
    second_player: PlayerConfig,
    /// CPU opponent settings.
    cpu: CpuConfig,
    /// Log output settings.
    logging: LoggingConfig,
}

/// Name and figure for one human seat.
///
/// A key left out of the file (or set to an empty string) takes the seat's
/// default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Display name.
    name: String,
    /// Figure symbol; any non-empty string.
    figure: String,
}

impl PlayerConfig {
    /// Creates a player entry.
    pub fn new(name: impl Into<String>, figure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            figure: figure.into(),
        }
    }

    /// Fills empty entries from `defaults`.
    fn or_defaults(mut self, defaults: &PlayerConfig) -> Self {
        if self.name.is_empty() {
            self.name = defaults.name.clone();
        }
        if self.figure.is_empty() {
            self.figure = defaults.figure.clone();
        }
        self
    }

    /// The configured figure as a [`Figure`].
    pub fn to_figure(&self) -> Figure {
        Figure::new(&self.figure)
    }
}

/// CPU opponent settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CpuConfig {
    /// Fixed RNG seed for reproducible CPU play.
    seed: Option<u64>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// File the log is written to; the terminal belongs to the UI.
    file: PathBuf,
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("tictaco.log"),
            filter: default_filter(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::new("Player 1", "X"),
            second_player: PlayerConfig::new("Player 2", "O"),
            cpu: CpuConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(player = %config.player.name, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        let defaults = Self::default();
        config.player = config.player.or_defaults(&defaults.player);
        config.second_player = config.second_player.or_defaults(&defaults.second_player);
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the log file location.
    pub fn with_log_file(mut self, file: PathBuf) -> Self {
        self.logging.file = file;
        self
    }

    /// Overrides the CPU seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.cpu.seed = seed;
        }
        self
    }

    /// Checks that every figure is printable.
    ///
    /// Two humans sharing a figure is only refused when a player-vs-player
    /// match is seated; CPU opponents pick around the human's figure.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in [&self.player, &self.second_player] {
            if entry.figure.trim().is_empty() {
                return Err(ConfigError::new(format!(
                    "Player '{}' has an empty figure",
                    entry.name
                )));
            }
        }
        Ok(())
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
