//! Rendering plugin - draws the game snapshot and particles each frame, plus camera shake.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use rand::prelude::*;

use crate::game::{
    ARENA_BORDER_COLOR, CELL_GAP, CELL_SIZE, CORNER_RADIUS, CameraShake, Direction, FOOD_COLOR,
    FOOD_GLOW_COLOR, GameOverEvent, GameSet, GameState, GRID_LINE_COLOR, Position,
    RenderSnapshot, SNAKE_HEAD_COLOR, SNAKE_HEAD_GLOW_COLOR, SNAKE_SEGMENT_COLOR, TickClock,
    WALL_COLOR, WALL_GLOW_COLOR, Z_FOOD, Z_GRID, Z_PARTICLE, Z_SNAKE_HEAD, Z_SNAKE_SEGMENT,
    Z_WALL,
};
use crate::particles::ParticleSet;

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraShake>().add_systems(
            Update,
            (
                draw_board,
                draw_particles,
                trigger_camera_shake_on_game_over,
                camera_shake_system,
            )
                .chain()
                .in_set(GameSet::Presentation),
        );
    }
}

/// Centre of a (possibly fractional) cell in world space. Grid `y` grows downward.
fn cell_to_world(x: f32, y: f32, grid_size: i32) -> Vec2 {
    let half = grid_size as f32 / 2.0;
    Vec2::new((x - half + 0.5) * CELL_SIZE, (half - y - 0.5) * CELL_SIZE)
}

/// Shortest signed step from `from` to `to` on a ring of `size` cells.
fn wrapped_delta(from: i32, to: i32, size: i32) -> f32 {
    let delta = to - from;
    let delta = if delta.abs() * 2 > size {
        delta - size * delta.signum()
    } else {
        delta
    };
    delta as f32
}

/// Segment position between the last two ticks, following wrap-around the short way.
fn interpolate(previous: Position, current: Position, progress: f32, grid_size: i32) -> Vec2 {
    let dx = wrapped_delta(previous.x, current.x, grid_size);
    let dy = wrapped_delta(previous.y, current.y, grid_size);
    cell_to_world(
        previous.x as f32 + dx * progress,
        previous.y as f32 + dy * progress,
        grid_size,
    )
}

fn heading_angle(direction: Direction) -> f32 {
    match direction {
        Direction::Right => 0.0,
        Direction::Up => std::f32::consts::FRAC_PI_2,
        Direction::Left => std::f32::consts::PI,
        Direction::Down => -std::f32::consts::FRAC_PI_2,
    }
}

fn set_shape(painter: &mut ShapePainter, at: Vec2, z: f32, color: Color, alpha_mode: ShapeAlphaMode) {
    painter.transform = Transform::from_xyz(at.x, at.y, z);
    painter.color = color;
    painter.alpha_mode = alpha_mode;
    painter.hollow = false;
    painter.corner_radii = Vec4::ZERO;
}

fn rounded_cell(painter: &mut ShapePainter, size: f32) {
    // Normalize corner radius relative to the shape size (0.0 to 1.0 range)
    painter.corner_radii = Vec4::splat(CORNER_RADIUS / (size / 2.0));
    painter.rect(Vec2::splat(size));
}

fn draw_grid(painter: &mut ShapePainter, grid_size: i32) {
    let extent = grid_size as f32 * CELL_SIZE;
    for i in 0..=grid_size {
        let offset = i as f32 * CELL_SIZE - extent / 2.0;
        set_shape(painter, Vec2::new(offset, 0.0), Z_GRID, GRID_LINE_COLOR, ShapeAlphaMode::Blend);
        painter.rect(Vec2::new(1.0, extent));
        set_shape(painter, Vec2::new(0.0, offset), Z_GRID, GRID_LINE_COLOR, ShapeAlphaMode::Blend);
        painter.rect(Vec2::new(extent, 1.0));
    }

    set_shape(painter, Vec2::ZERO, Z_GRID, ARENA_BORDER_COLOR, ShapeAlphaMode::Add);
    painter.hollow = true;
    painter.thickness = 4.0;
    painter.corner_radii = Vec4::splat(0.02);
    painter.rect(Vec2::splat(extent + 4.0));
}

fn draw_walls(painter: &mut ShapePainter, snapshot: &RenderSnapshot) {
    let size = CELL_SIZE - CELL_GAP;
    for wall in snapshot.walls.iter() {
        let at = cell_to_world(wall.x as f32, wall.y as f32, snapshot.grid.size);
        set_shape(painter, at, Z_WALL - 0.1, WALL_GLOW_COLOR, ShapeAlphaMode::Add);
        painter.circle(CELL_SIZE * 0.7);
        set_shape(painter, at, Z_WALL, WALL_COLOR, ShapeAlphaMode::Blend);
        rounded_cell(painter, size);
    }
}

fn draw_food(painter: &mut ShapePainter, snapshot: &RenderSnapshot, elapsed: f32) {
    // Use sine wave for smooth pulsing
    let pulse = 1.0 + (elapsed / 0.8 * std::f32::consts::TAU).sin() * 0.15;
    let at = cell_to_world(snapshot.food.x as f32, snapshot.food.y as f32, snapshot.grid.size);
    set_shape(painter, at, Z_FOOD - 0.1, FOOD_GLOW_COLOR, ShapeAlphaMode::Add);
    painter.circle(CELL_SIZE * 0.8 * pulse);
    set_shape(painter, at, Z_FOOD, FOOD_COLOR, ShapeAlphaMode::Blend);
    rounded_cell(painter, (CELL_SIZE - CELL_GAP) * pulse);
}

fn draw_snake(
    painter: &mut ShapePainter,
    snapshot: &RenderSnapshot,
    progress: f32,
    heading: Direction,
) {
    let grid_size = snapshot.grid.size;
    let segment_size = CELL_SIZE - CELL_GAP;

    for (i, current) in snapshot.snake.iter().enumerate().rev() {
        let previous = snapshot.previous_snake.get(i).copied().unwrap_or(*current);
        let at = interpolate(previous, *current, progress, grid_size);

        if i == 0 {
            // Glow effect behind the head
            set_shape(painter, at, Z_SNAKE_HEAD - 0.1, SNAKE_HEAD_GLOW_COLOR, ShapeAlphaMode::Add);
            painter.circle(CELL_SIZE * 0.8);
            set_shape(painter, at, Z_SNAKE_HEAD, SNAKE_HEAD_COLOR, ShapeAlphaMode::Blend);
            rounded_cell(painter, segment_size * 0.95);

            let facing = Vec2::from_angle(heading_angle(heading));
            for side in [1.0, -1.0] {
                let eye = at + facing.rotate(Vec2::new(CELL_SIZE * 0.15, side * CELL_SIZE * 0.15));
                set_shape(painter, eye, Z_SNAKE_HEAD + 0.1, Color::BLACK, ShapeAlphaMode::Blend);
                painter.circle(CELL_SIZE * 0.08);
            }
        } else {
            set_shape(painter, at, Z_SNAKE_SEGMENT, SNAKE_SEGMENT_COLOR, ShapeAlphaMode::Blend);
            rounded_cell(painter, segment_size);
        }
    }
}

/// System to draw walls, food and snake from the current snapshot.
fn draw_board(
    mut painter: ShapePainter,
    game_state: Res<GameState>,
    clock: Res<TickClock>,
    time: Res<Time>,
) {
    let snapshot = game_state.snapshot();
    let progress = if snapshot.phase.is_running() {
        clock.progress()
    } else {
        1.0
    };

    draw_grid(&mut painter, snapshot.grid.size);
    draw_walls(&mut painter, &snapshot);
    draw_food(&mut painter, &snapshot, time.elapsed_secs());
    draw_snake(&mut painter, &snapshot, progress, game_state.velocity());
}

/// System to draw particles, fading with their remaining life.
fn draw_particles(
    mut painter: ShapePainter,
    game_state: Res<GameState>,
    particles: Res<ParticleSet>,
) {
    let grid_size = game_state.grid().size;
    for particle in particles.iter() {
        // Particle positions are already cell-centred
        let at = cell_to_world(particle.position.x - 0.5, particle.position.y - 0.5, grid_size);
        let color = particle.color.with_alpha(particle.life.clamp(0.0, 1.0));
        set_shape(&mut painter, at, Z_PARTICLE, color, ShapeAlphaMode::Blend);
        painter.rect(Vec2::splat(particle.size));
    }
}

/// System to trigger camera shake on game over.
fn trigger_camera_shake_on_game_over(
    mut game_over_reader: MessageReader<GameOverEvent>,
    mut camera_shake: ResMut<CameraShake>,
) {
    if game_over_reader.read().next().is_some() {
        camera_shake.timer = Timer::from_seconds(0.5, TimerMode::Once);
        camera_shake.intensity = 8.0;
    }
}

/// System to apply camera shake effect.
fn camera_shake_system(
    time: Res<Time>,
    mut camera_shake: ResMut<CameraShake>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    if camera_shake.timer.is_finished() {
        return;
    }
    camera_shake.timer.tick(time.delta());

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        if camera_shake.timer.is_finished() {
            // Reset camera position when shake is done
            camera_transform.translation.x = 0.0;
            camera_transform.translation.y = 0.0;
        } else {
            let decay = 1.0 - camera_shake.timer.fraction();
            let mut rng = rand::rng();
            camera_transform.translation.x =
                (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;
            camera_transform.translation.y =
                (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_delta_takes_short_way() {
        assert_eq!(wrapped_delta(19, 0, 20), 1.0);
        assert_eq!(wrapped_delta(0, 19, 20), -1.0);
        assert_eq!(wrapped_delta(5, 6, 20), 1.0);
        assert_eq!(wrapped_delta(6, 6, 20), 0.0);
    }

    #[test]
    fn interpolation_across_edge_leaves_grid_briefly() {
        let at = interpolate(Position::new(19, 4), Position::new(0, 4), 0.5, 20);
        let edge = cell_to_world(19.5, 4.0, 20);
        assert!((at - edge).length() < 1e-4);
    }

    #[test]
    fn grid_corners_map_symmetrically() {
        let top_left = cell_to_world(0.0, 0.0, 20);
        let bottom_right = cell_to_world(19.0, 19.0, 20);
        assert!((top_left + bottom_right).length() < 1e-4);
        assert!(top_left.y > 0.0 && top_left.x < 0.0);
    }
}
