//! Toroidal grid arithmetic.

use rand::Rng;

use super::Direction;

/// Maps any integer coordinate onto `[0, size)`.
pub fn wrap(coord: i32, size: i32) -> i32 {
    coord.rem_euclid(size)
}

/// A single grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Plain (non-wrapping) Manhattan distance.
    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Square toroidal coordinate space of side `size`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    pub size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Self {
        Grid { size }
    }

    pub fn cell_count(&self) -> usize {
        (self.size * self.size) as usize
    }

    #[cfg(test)]
    pub fn contains(&self, position: Position) -> bool {
        (0..self.size).contains(&position.x) && (0..self.size).contains(&position.y)
    }

    pub fn wrap_position(&self, x: i32, y: i32) -> Position {
        Position::new(wrap(x, self.size), wrap(y, self.size))
    }

    /// Moves one cell in `direction`; leaving an edge re-enters on the opposite one.
    pub fn step(&self, position: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.wrap_position(position.x + dx, position.y + dy)
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.random_range(0..self.size),
            rng.random_range(0..self.size),
        )
    }

    /// Every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_maps_into_range() {
        for size in [1, 2, 7, 20] {
            for coord in -100..100 {
                let wrapped = wrap(coord, size);
                assert!((0..size).contains(&wrapped), "{coord} wrapped to {wrapped}");
                assert_eq!(wrap(wrapped, size), wrapped);
            }
        }
    }

    #[test]
    fn wrap_handles_edges() {
        assert_eq!(wrap(-1, 20), 19);
        assert_eq!(wrap(20, 20), 0);
        assert_eq!(wrap(-20, 20), 0);
        assert_eq!(wrap(i32::MIN, 20), i32::MIN.rem_euclid(20));
    }

    #[test]
    fn step_wraps_right_edge() {
        let grid = Grid::new(20);
        let next = grid.step(Position::new(19, 7), Direction::Right);
        assert_eq!(next, Position::new(0, 7));
    }

    #[test]
    fn step_wraps_top_edge() {
        let grid = Grid::new(20);
        assert_eq!(grid.step(Position::new(4, 0), Direction::Up), Position::new(4, 19));
        assert_eq!(grid.step(Position::new(4, 19), Direction::Down), Position::new(4, 0));
        assert_eq!(grid.step(Position::new(0, 3), Direction::Left), Position::new(19, 3));
    }

    #[test]
    fn cells_covers_grid_once() {
        let grid = Grid::new(5);
        let cells: Vec<Position> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert!(cells.iter().all(|c| grid.contains(*c)));
        let unique: std::collections::HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn manhattan_distance_is_plain() {
        let a = Position::new(1, 1);
        let b = Position::new(4, 3);
        assert_eq!(a.manhattan_distance(&b), 5);
        assert_eq!(b.manhattan_distance(&a), 5);
    }
}
