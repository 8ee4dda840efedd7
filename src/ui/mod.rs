//! UI plugin - handles menus, game over screen, score display, and game flow.

use bevy::input::touch::{Touch, Touches};
use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use bevy::render::view::Hdr;

use crate::game::{
    ARENA_COLOR, CELL_SIZE, CrashCause, FONT_PATH, GameOverEvent, GameOverUI, GamePhase, GameSet,
    GameStartedEvent, GameState, HighScoreText, MenuUI, NewHighScoreEvent, SWIPE_THRESHOLD,
    ScoreText, TickClock,
};
use crate::score::HighScore;

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system)
            .add_systems(Update, start_or_restart_game.in_set(GameSet::Lifecycle))
            .add_systems(
                Update,
                (update_score_text, spawn_game_over_screen_system)
                    .chain()
                    .in_set(GameSet::Presentation),
            );
    }
}

fn text_font(asset_server: &AssetServer, font_size: f32) -> TextFont {
    TextFont {
        font: asset_server.load(FONT_PATH),
        font_size,
        ..default()
    }
}

/// Initial setup system - camera, arena, score text.
fn setup_system(
    mut commands: Commands,
    game_state: Res<GameState>,
    high_score: Res<HighScore>,
    asset_server: Res<AssetServer>,
) {
    // Setup camera with HDR and bloom for glowing effects
    commands.spawn((
        Camera2d,
        Hdr,
        Bloom {
            intensity: 0.3,
            low_frequency_boost: 0.6,
            low_frequency_boost_curvature: 0.5,
            high_pass_frequency: 0.8,
            ..default()
        },
    ));

    // Arena background
    let arena_size = game_state.grid().size as f32 * CELL_SIZE;
    commands.spawn((
        Sprite {
            color: ARENA_COLOR,
            custom_size: Some(Vec2::splat(arena_size)),
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    commands.spawn((
        Text::from("Score: 0"),
        text_font(&asset_server, 20.0),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));

    commands.spawn((
        Text::from(format!("High Score: {}", high_score.best())),
        text_font(&asset_server, 20.0),
        TextColor(Color::srgba(1.0, 1.0, 0.3, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(10.0),
            ..default()
        },
        HighScoreText,
    ));

    if game_state.phase() == GamePhase::NotStarted {
        spawn_start_menu(&mut commands, &asset_server);
    }
}

/// Spawns the start menu UI.
fn spawn_start_menu(commands: &mut Commands, asset_server: &AssetServer) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            MenuUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from("NEON SNAKE"),
                text_font(asset_server, 64.0),
                TextColor(Color::srgba(0.0, 1.0, 0.53, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            for line in [
                "Arrow Keys, WASD or swipe to move",
                "Eat the food, dodge the walls",
                "Edges wrap around",
            ] {
                parent.spawn((
                    Text::from(line),
                    text_font(asset_server, 18.0),
                    TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
                    Node {
                        margin: UiRect::bottom(Val::Px(10.0)),
                        ..default()
                    },
                ));
            }

            parent.spawn((
                Text::from("Press SPACE or tap to start"),
                text_font(asset_server, 24.0),
                TextColor(Color::srgba(1.0, 1.0, 0.3, 1.0)),
                Node {
                    margin: UiRect::top(Val::Px(30.0)),
                    ..default()
                },
            ));
        });
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(
    commands: &mut Commands,
    asset_server: &AssetServer,
    event: &GameOverEvent,
    new_best: bool,
    best: u32,
) {
    let score = event.score;
    let cause = match event.cause {
        CrashCause::Wall => "You hit a wall",
        CrashCause::SelfCollision => "You ran into yourself",
        CrashCause::BoardFull => "No room left on the board",
    };

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GameOverUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from("GAME OVER"),
                text_font(asset_server, 60.0),
                TextColor(Color::srgba(1.0, 0.3, 0.3, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from(cause),
                text_font(asset_server, 18.0),
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from(format!("Score: {}", score)),
                text_font(asset_server, 30.0),
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from(best_line(new_best, best)),
                text_font(asset_server, 22.0),
                TextColor(Color::srgba(1.0, 1.0, 0.3, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from("Press SPACE or tap to try again"),
                text_font(asset_server, 20.0),
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
            ));
        });
}

fn best_line(new_best: bool, best: u32) -> String {
    if new_best {
        "New High Score!".to_string()
    } else {
        format!("High Score: {}", best)
    }
}

/// System to spawn game over screen when game ends.
fn spawn_game_over_screen_system(
    mut commands: Commands,
    mut game_over_reader: MessageReader<GameOverEvent>,
    mut new_high_score_reader: MessageReader<NewHighScoreEvent>,
    high_score: Res<HighScore>,
    asset_server: Res<AssetServer>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    let new_best = new_high_score_reader.read().count() > 0;
    let Some(event) = game_over_reader.read().last() else {
        return;
    };
    if game_over_ui.is_empty() {
        spawn_game_over_screen(
            &mut commands,
            &asset_server,
            event,
            new_best,
            high_score.best(),
        );
    }
}

/// A touch that ended close to where it started.
fn is_tap(touch: &Touch) -> bool {
    touch.distance().length() < SWIPE_THRESHOLD
}

/// System to start the game from the menu, or restart it after game over.
fn start_or_restart_game(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    mut game_state: ResMut<GameState>,
    mut clock: ResMut<TickClock>,
    mut started_writer: MessageWriter<GameStartedEvent>,
    overlays: Query<Entity, Or<(With<MenuUI>, With<GameOverUI>)>>,
) {
    let requested = keyboard_input.any_just_pressed([KeyCode::Space, KeyCode::Enter])
        || touches.iter_just_released().any(is_tap);
    if !requested || !game_state.start(&mut rand::rng()) {
        return;
    }

    for entity in overlays.iter() {
        commands.entity(entity).despawn();
    }
    clock.reset();
    started_writer.write(GameStartedEvent);
}

/// System to update the score displays.
fn update_score_text(
    game_state: Res<GameState>,
    high_score: Res<HighScore>,
    mut score_text: Query<&mut Text, (With<ScoreText>, Without<HighScoreText>)>,
    mut high_score_text: Query<&mut Text, (With<HighScoreText>, Without<ScoreText>)>,
) {
    if let Ok(mut text) = score_text.single_mut() {
        *text = Text::from(format!("Score: {}", game_state.snapshot().score));
    }
    if let Ok(mut text) = high_score_text.single_mut() {
        *text = Text::from(format!("High Score: {}", high_score.best()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::{
        ButtonState, InputPlugin,
        keyboard::{Key, KeyboardInput},
        touch::{TouchInput, TouchPhase},
    };
    use rand::{SeedableRng, rngs::StdRng};

    use crate::game::{GameConfig, MOVE_INTERVAL, TickOutcome};

    /// A board whose game just ended against a wall.
    fn finished_game() -> GameState {
        let mut rng = StdRng::seed_from_u64(21);
        let mut game = GameState::new(&GameConfig::default(), &mut rng);
        assert!(game.start(&mut rng));
        game.arrange(&[(10, 15), (10, 16), (10, 17)], &[(10, 14)], (0, 0));
        assert!(matches!(game.tick(&mut rng), TickOutcome::Crashed { .. }));
        game
    }

    fn lifecycle_app(game: GameState) -> App {
        let mut app = App::new();
        app.add_plugins(InputPlugin)
            .add_message::<GameStartedEvent>()
            .insert_resource(TickClock::new(MOVE_INTERVAL))
            .insert_resource(game)
            .add_systems(Update, start_or_restart_game);
        app
    }

    fn touch(app: &mut App, phase: TouchPhase, x: f32, y: f32) {
        app.world_mut().write_message(TouchInput {
            phase,
            position: Vec2::new(x, y),
            window: Entity::PLACEHOLDER,
            force: None,
            id: 7,
        });
        app.update();
    }

    fn phase(app: &App) -> GamePhase {
        app.world().resource::<GameState>().phase()
    }

    #[test]
    fn swipe_after_game_over_keeps_result_on_screen() {
        let mut app = lifecycle_app(finished_game());
        touch(&mut app, TouchPhase::Started, 0.0, 0.0);
        touch(&mut app, TouchPhase::Moved, 120.0, 0.0);
        touch(&mut app, TouchPhase::Ended, 120.0, 0.0);
        assert_eq!(phase(&app), GamePhase::GameOver);
    }

    #[test]
    fn tap_after_game_over_restarts() {
        let mut app = lifecycle_app(finished_game());
        touch(&mut app, TouchPhase::Started, 40.0, 40.0);
        touch(&mut app, TouchPhase::Moved, 44.0, 41.0);
        touch(&mut app, TouchPhase::Ended, 44.0, 41.0);
        assert_eq!(phase(&app), GamePhase::Running);
        assert_eq!(
            app.world()
                .resource::<Messages<GameStartedEvent>>()
                .iter_current_update_messages()
                .count(),
            1
        );
    }

    #[test]
    fn space_restarts_after_game_over() {
        let mut app = lifecycle_app(finished_game());
        app.world_mut().write_message(KeyboardInput {
            key_code: KeyCode::Space,
            logical_key: Key::Space,
            state: ButtonState::Pressed,
            text: None,
            repeat: false,
            window: Entity::PLACEHOLDER,
        });
        app.update();
        assert_eq!(phase(&app), GamePhase::Running);
    }

    #[test]
    fn tie_with_best_is_not_a_new_high_score() {
        assert_eq!(best_line(false, 40), "High Score: 40");
        assert_eq!(best_line(true, 50), "New High Score!");
    }
}
