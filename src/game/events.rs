//! Game events (messages).

use bevy::prelude::*;

use super::{CrashCause, Position};

/// Message triggered when a new game begins (menu start or restart).
#[derive(Message)]
pub struct GameStartedEvent;

/// Message triggered when food is eaten (for visual effects).
#[derive(Message)]
pub struct FoodEatenEvent {
    pub position: Position,
}

/// Message triggered once when the running game ends.
#[derive(Message)]
pub struct GameOverEvent {
    pub score: u32,
    pub cause: CrashCause,
}

/// Message triggered when a finished game beats the stored best score.
#[derive(Message)]
pub struct NewHighScoreEvent {
    pub score: u32,
}
