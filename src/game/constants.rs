//! Game constants for grid size, scoring, colors, timing, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

// Grid dimensions (square, toroidal)
pub const GRID_SIZE: i32 = 20;

// Level layout
pub const WALL_COUNT: usize = 15;
pub const WALL_SAFE_DISTANCE: i32 = 3;
pub const INITIAL_SNAKE_LENGTH: i32 = 3;

// Random placement gives up on pure rejection sampling after this many draws per cell
pub const SAMPLE_ATTEMPTS_PER_CELL: usize = 64;

// Scoring
pub const FOOD_SCORE: u32 = 10;
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";
pub const HIGH_SCORE_PATH_ENV: &str = "SNAKE_HIGH_SCORE_PATH";

// Timing
pub const MOVE_INTERVAL: Duration = Duration::from_millis(100);
pub const MAX_CATCH_UP_TICKS: u32 = 3;

// Touches that travel less than this many logical pixels are taps, not swipes
pub const SWIPE_THRESHOLD: f32 = 30.0;

// Particles
pub const PARTICLE_BURST_COUNT: usize = 10;
pub const PARTICLE_MAX_SPEED: f32 = 0.25;
pub const PARTICLE_MIN_SIZE: f32 = 2.0;
pub const PARTICLE_MAX_SIZE: f32 = 7.0;
pub const PARTICLE_DECAY: f32 = 0.05;

// Visual settings
pub const CELL_SIZE: f32 = 25.0;
pub const CELL_GAP: f32 = 2.0;
pub const CORNER_RADIUS: f32 = 4.0;
pub const FONT_PATH: &str = "fonts/FiraSans-Bold.ttf";

// Colors
pub const SNAKE_HEAD_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 1.0);
pub const SNAKE_HEAD_GLOW_COLOR: Color = Color::srgba(0.0, 1.0, 0.53, 0.35);
pub const SNAKE_SEGMENT_COLOR: Color = Color::srgba(0.0, 1.0, 0.53, 1.0);
pub const WALL_COLOR: Color = Color::srgba(0.0, 0.8, 1.0, 1.0);
pub const WALL_GLOW_COLOR: Color = Color::srgba(0.0, 0.8, 1.0, 0.25);
pub const FOOD_COLOR: Color = Color::srgba(1.0, 0.0, 0.33, 1.0);
pub const FOOD_GLOW_COLOR: Color = Color::srgba(1.0, 0.0, 0.33, 0.4);
pub const PARTICLE_COLOR: Color = FOOD_COLOR;
pub const GRID_LINE_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 1.0);
pub const ARENA_COLOR: Color = Color::srgba(0.02, 0.02, 0.02, 1.0);
pub const ARENA_BORDER_COLOR: Color = Color::srgba(0.0, 1.0, 0.53, 0.6);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.04, 0.04, 0.04, 1.0);

// Z-index constants for rendering layers
pub const Z_GRID: f32 = 0.2;
pub const Z_WALL: f32 = 1.0;
pub const Z_FOOD: f32 = 1.2;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;
pub const Z_PARTICLE: f32 = 3.0;
