//! Core game module containing the simulation state, shared types, events, and constants.

mod components;
mod config;
mod constants;
mod events;
mod grid;
mod resources;
mod state;

pub use components::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use grid::*;
pub use resources::*;
pub use state::*;

use bevy::prelude::*;

/// Frame ordering shared by every plugin: input lands before the tick, and
/// effects and UI see the tick's messages in the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Lifecycle,
    Input,
    Simulation,
    Scoring,
    Effects,
    Presentation,
}
