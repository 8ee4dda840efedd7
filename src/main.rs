mod food;
mod game;
mod particles;
mod rendering;
mod score;
mod snake;
mod ui;
mod walls;

use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::Shape2dPlugin;

use game::{
    BACKGROUND_COLOR, CELL_SIZE, FoodEatenEvent, GameConfig, GameOverEvent, GameSet,
    GameStartedEvent, GameState, NewHighScoreEvent, TickClock,
};
use particles::ParticlePlugin;
use rendering::RenderingPlugin;
use score::ScorePlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() {
    let config = GameConfig::from_env();
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            eprintln!("Invalid configuration ({}), using defaults", e);
            GameConfig {
                high_score_path: config.high_score_path,
                ..GameConfig::default()
            }
        }
    };

    let window_side = (config.grid_size as f32 * CELL_SIZE + 20.0) as u32;
    let game_state = GameState::new(&config, &mut rand::rng());

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(window_side, window_side),
                    title: "Neon Snake".to_string(),
                    ..default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(TickClock::new(config.tick_interval))
        .insert_resource(game_state)
        .insert_resource(config)
        .add_message::<GameStartedEvent>()
        .add_message::<FoodEatenEvent>()
        .add_message::<GameOverEvent>()
        .add_message::<NewHighScoreEvent>()
        .configure_sets(
            Update,
            (
                GameSet::Lifecycle,
                GameSet::Input,
                GameSet::Simulation,
                GameSet::Scoring,
                GameSet::Effects,
                GameSet::Presentation,
            )
                .chain(),
        )
        .add_plugins((
            ScorePlugin,
            SnakePlugin,
            ParticlePlugin,
            RenderingPlugin,
            UiPlugin,
        ))
        .run();
}
