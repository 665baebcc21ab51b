use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of the square board when no size is configured.
pub const DEFAULT_GRID_SIZE: u16 = 16;

/// Errors raised while loading a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid size must be at least 1")]
    ZeroGridSize,
}

/// Settings recognized when a new game is initialized.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board is `grid_size` x `grid_size` cells, origin at the top-left.
    pub grid_size: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl GameConfig {
    /// Creates a config for a board of the given side length.
    #[must_use]
    pub fn with_grid_size(grid_size: u16) -> Self {
        Self { grid_size }
    }

    /// Parses a JSON config document; absent fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<Self>(raw)?;
        if config.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        Ok(config)
    }
}
