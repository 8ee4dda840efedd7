//! Snake plugin - direction input and the fixed-rate simulation driver.

mod body;

pub use body::Snake;

use bevy::{input::touch::Touches, prelude::*};

use crate::game::{
    Direction, FoodEatenEvent, GameOverEvent, GameSet, GameState, MAX_CATCH_UP_TICKS, TickClock,
    TickOutcome,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (snake_keyboard_input, snake_swipe_input).in_set(GameSet::Input),
                advance_simulation.in_set(GameSet::Simulation),
            ),
        );
    }
}

/// System to read keyboard input and propose direction changes.
fn snake_keyboard_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
) {
    if !game_state.phase().is_running() {
        return;
    }

    if let Some(direction) = Direction::from_keys(&keyboard_input) {
        game_state.propose_direction(direction);
    }
}

/// System to turn finished touch swipes into direction proposals.
fn snake_swipe_input(touches: Res<Touches>, mut game_state: ResMut<GameState>) {
    if !game_state.phase().is_running() {
        return;
    }

    for touch in touches.iter_just_released() {
        if let Some(direction) = Direction::from_swipe(touch.distance()) {
            game_state.propose_direction(direction);
        }
    }
}

/// System to run every simulation tick that came due this frame.
fn advance_simulation(
    time: Res<Time>,
    mut clock: ResMut<TickClock>,
    mut game_state: ResMut<GameState>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
    mut game_over_writer: MessageWriter<GameOverEvent>,
) {
    if !game_state.phase().is_running() {
        return;
    }

    let due = clock.advance(time.delta()).min(MAX_CATCH_UP_TICKS);
    let mut rng = rand::rng();
    for _ in 0..due {
        match game_state.tick(&mut rng) {
            TickOutcome::Ate { position } => {
                food_eaten_writer.write(FoodEatenEvent { position });
            }
            TickOutcome::Crashed { score, cause } => {
                game_over_writer.write(GameOverEvent { score, cause });
                break;
            }
            TickOutcome::Moved | TickOutcome::Idle => {}
        }
    }
}
