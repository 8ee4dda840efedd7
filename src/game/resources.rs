//! Game resources (singleton state) other than the simulation aggregate.

use bevy::prelude::*;
use std::time::Duration;

use super::Direction;

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        *self == GamePhase::Running
    }
}

/// Holds the latest legal direction proposed since the last tick.
#[derive(Debug, Default)]
pub struct InputBuffer {
    pending: Option<Direction>,
}

impl InputBuffer {
    /// Buffer a direction change. A later proposal replaces an earlier one.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Take the buffered direction, leaving the buffer empty.
    pub fn take_direction(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    /// Clear all queued directions.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

/// Fixed-rate tick source. The driver asks it how many ticks are due for the
/// time that passed; the simulation itself never reads the clock.
#[derive(Resource)]
pub struct TickClock {
    timer: Timer,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        TickClock {
            timer: Timer::new(period, TimerMode::Repeating),
        }
    }

    /// Advance by `delta` and return the number of ticks that became due.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.timer.tick(delta);
        self.timer.times_finished_this_tick()
    }

    /// Progress towards the next tick, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.timer.fraction()
    }

    pub fn reset(&mut self) {
        self.timer.reset();
    }
}

/// Resource for camera shake effect.
#[derive(Resource)]
pub struct CameraShake {
    pub timer: Timer,
    pub intensity: f32,
}

impl Default for CameraShake {
    fn default() -> Self {
        CameraShake {
            timer: Timer::from_seconds(0.0, TimerMode::Once),
            intensity: 0.0,
        }
    }
}
