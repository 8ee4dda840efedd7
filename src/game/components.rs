//! Shared components and the direction type.

use bevy::prelude::*;

use super::SWIPE_THRESHOLD;

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit step on the grid. `y` grows downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Reads newly pressed direction keys (arrows or WASD).
    pub fn from_keys(keyboard_input: &ButtonInput<KeyCode>) -> Option<Direction> {
        if keyboard_input.any_just_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
            Some(Direction::Left)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
            Some(Direction::Right)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowUp, KeyCode::KeyW]) {
            Some(Direction::Up)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowDown, KeyCode::KeyS]) {
            Some(Direction::Down)
        } else {
            None
        }
    }

    /// Maps a swipe displacement (screen space, `y` down) to its dominant axis.
    /// Displacements shorter than [`SWIPE_THRESHOLD`] are taps and map to nothing.
    pub fn from_swipe(delta: Vec2) -> Option<Direction> {
        if delta.length() < SWIPE_THRESHOLD {
            None
        } else if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                Some(Direction::Right)
            } else {
                Some(Direction::Left)
            }
        } else if delta.y > 0.0 {
            Some(Direction::Down)
        } else {
            Some(Direction::Up)
        }
    }
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the high score display UI element.
#[derive(Component)]
pub struct HighScoreText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

/// Component to mark the start menu UI.
#[derive(Component)]
pub struct MenuUI;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn swipe_picks_dominant_axis() {
        assert_eq!(Direction::from_swipe(Vec2::new(40.0, 10.0)), Some(Direction::Right));
        assert_eq!(Direction::from_swipe(Vec2::new(-40.0, 10.0)), Some(Direction::Left));
        assert_eq!(Direction::from_swipe(Vec2::new(5.0, 30.0)), Some(Direction::Down));
        assert_eq!(Direction::from_swipe(Vec2::new(5.0, -30.0)), Some(Direction::Up));
    }

    #[test]
    fn swipe_tie_goes_vertical() {
        assert_eq!(Direction::from_swipe(Vec2::new(40.0, 40.0)), Some(Direction::Down));
        assert_eq!(Direction::from_swipe(Vec2::new(-40.0, -40.0)), Some(Direction::Up));
    }

    #[test]
    fn short_touches_are_taps() {
        assert_eq!(Direction::from_swipe(Vec2::ZERO), None);
        assert_eq!(Direction::from_swipe(Vec2::new(3.0, 0.0)), None);
        assert_eq!(Direction::from_swipe(Vec2::new(-12.0, 20.0)), None);
        assert_eq!(
            Direction::from_swipe(Vec2::new(SWIPE_THRESHOLD, 0.0)),
            Some(Direction::Right)
        );
    }

    #[test]
    fn keys_map_to_directions() {
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(KeyCode::KeyW);
        assert_eq!(Direction::from_keys(&input), Some(Direction::Up));

        input.clear();
        assert_eq!(Direction::from_keys(&input), None);

        input.press(KeyCode::ArrowLeft);
        assert_eq!(Direction::from_keys(&input), Some(Direction::Left));
    }
}
