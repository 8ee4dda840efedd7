//! Runtime configuration, defaulting to the compile-time constants.

use bevy::prelude::*;
use std::{path::PathBuf, time::Duration};
use thiserror::Error;

use super::{
    GRID_SIZE, HIGH_SCORE_KEY, HIGH_SCORE_PATH_ENV, INITIAL_SNAKE_LENGTH, MOVE_INTERVAL,
    WALL_COUNT, WALL_SAFE_DISTANCE,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {0} is too small for the starting snake")]
    GridTooSmall(i32),
    #[error("{walls} walls do not fit on a {size}x{size} grid")]
    TooManyWalls { walls: usize, size: i32 },
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub grid_size: i32,
    pub wall_count: usize,
    pub tick_interval: Duration,
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: GRID_SIZE,
            wall_count: WALL_COUNT,
            tick_interval: MOVE_INTERVAL,
            high_score_path: PathBuf::from(HIGH_SCORE_KEY),
        }
    }
}

impl GameConfig {
    /// Defaults, with the high score location taken from the environment if set.
    pub fn from_env() -> Self {
        let mut config = GameConfig::default();
        if let Some(path) = std::env::var_os(HIGH_SCORE_PATH_ENV) {
            config.high_score_path = PathBuf::from(path);
        }
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // The starting body hangs below the head, two rows above the bottom edge.
        if self.grid_size < 2 * INITIAL_SNAKE_LENGTH + 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        // The head's safe zone never reaches an edge once the size check passes.
        let safe_zone = (2 * WALL_SAFE_DISTANCE * (WALL_SAFE_DISTANCE - 1) + 1) as usize;
        let body_outside_zone = (INITIAL_SNAKE_LENGTH - WALL_SAFE_DISTANCE).max(0) as usize;
        let free = (self.grid_size * self.grid_size) as usize - safe_zone - body_outside_zone;
        // Leave room for food.
        if self.wall_count >= free {
            return Err(ConfigError::TooManyWalls {
                walls: self.wall_count,
                size: self.grid_size,
            });
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
