//! Game configuration loaded from TOML.

use crate::games::grid::{Dimensions, GameEngine, Mark, MarkSequence, SetupError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a new game.
///
/// ```toml
/// height = 6
/// width = 5
/// marks = ["X", "O", "A"]
/// log_file = "strictly_triples.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Number of rows.
    #[serde(default = "default_height")]
    height: usize,

    /// Number of squares per row.
    #[serde(default = "default_width")]
    width: usize,

    /// Player marks in turn order.
    #[serde(default = "default_marks")]
    marks: Vec<Mark>,

    /// Where the interactive game writes its log.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

#[instrument]
fn default_height() -> usize {
    Dimensions::DEFAULT.height()
}

#[instrument]
fn default_width() -> usize {
    Dimensions::DEFAULT.width()
}

#[instrument]
fn default_marks() -> Vec<Mark> {
    MarkSequence::default().as_slice().to_vec()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
            marks: default_marks(),
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            height = config.height,
            width = config.width,
            players = config.marks.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Validated board dimensions.
    #[instrument(skip(self))]
    pub fn dimensions(&self) -> Result<Dimensions, SetupError> {
        Dimensions::new(self.height, self.width)
    }

    /// Builds an engine for a new game with these settings.
    #[instrument(skip(self), fields(height = self.height, width = self.width))]
    pub fn engine(&self) -> Result<GameEngine, SetupError> {
        let dimensions = self.dimensions()?;
        let marks = MarkSequence::new(self.marks.iter().copied())?;
        Ok(GameEngine::new(dimensions, marks))
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

impl From<SetupError> for ConfigError {
    #[track_caller]
    fn from(err: SetupError) -> Self {
        Self::new(format!("Invalid game settings: {}", err))
    }
}
