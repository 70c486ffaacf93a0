//! Arena configuration loaded from TOML
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! standard setup. Command-line flags override individual values.

use ataxx_core::{Board, Pos};
use minimax_engine::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid start position: {0}")]
    InvalidStart(String),
    #[error("invalid search depth: {0}")]
    InvalidDepth(String),
}

/// Top-level arena configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub depths: DepthConfig,
    #[serde(rename = "match")]
    pub matches: MatchConfig,
    pub start: StartConfig,
}

/// Search depth for each difficulty level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthConfig {
    pub easy: u8,
    pub normal: u8,
    pub hard: u8,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            easy: Difficulty::Easy.default_depth(),
            normal: Difficulty::Normal.default_depth(),
            hard: Difficulty::Hard.default_depth(),
        }
    }
}

impl DepthConfig {
    pub fn depth_for(&self, difficulty: Difficulty) -> u8 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Settings for engine-versus-engine matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies after which an unfinished game is scored as a draw
    pub max_plies: u32,
    /// Whether engine1 switches sides every game
    pub alternate_sides: bool,
    /// Base seed for engine randomness; fresh entropy when absent
    pub seed: Option<u64>,
    /// Sleep between polls of a searching player
    pub tick_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 200,
            alternate_sides: true,
            seed: None,
            tick_ms: 1,
        }
    }
}

/// Starting cells as `[x, y]` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    pub side1: [i8; 2],
    pub side2: [i8; 2],
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            side1: [0, 0],
            side2: [7, 7],
        }
    }
}

impl StartConfig {
    /// Builds the opening board described by this section.
    pub fn board(&self) -> Result<Board, ConfigError> {
        let side1 = start_pos(self.side1)?;
        let side2 = start_pos(self.side2)?;
        Board::new(side1, side2).map_err(|e| ConfigError::InvalidStart(e.to_string()))
    }
}

fn start_pos([x, y]: [i8; 2]) -> Result<Pos, ConfigError> {
    Pos::new(x, y).map_err(|e| ConfigError::InvalidStart(e.to_string()))
}

impl ArenaConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Rejects settings no game could be played with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.start.board()?;
        for difficulty in Difficulty::ALL {
            if self.depths.depth_for(difficulty) == 0 {
                return Err(ConfigError::InvalidDepth(format!(
                    "{difficulty} must search at least one ply"
                )));
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for ArenaConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ArenaConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
