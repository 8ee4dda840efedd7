//! Obstacle generator - random static wall cells that keep clear of the starting snake.

use bevy::prelude::*;
use rand::prelude::*;
use std::collections::HashSet;

use crate::game::{Grid, Position, SAMPLE_ATTEMPTS_PER_CELL, WALL_SAFE_DISTANCE};
use crate::snake::Snake;

/// Wall cells for one game. Built once per reset and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Walls {
    cells: HashSet<Position>,
}

impl Walls {
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}

#[cfg(test)]
impl FromIterator<Position> for Walls {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Walls {
            cells: iter.into_iter().collect(),
        }
    }
}

fn is_wall_safe(cell: Position, snake: &Snake) -> bool {
    !snake.contains(cell) && cell.manhattan_distance(&snake.head()) >= WALL_SAFE_DISTANCE
}

/// Generates `count` distinct wall cells, none on the snake and none within
/// `WALL_SAFE_DISTANCE` of its head.
pub fn generate_walls<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    count: usize,
    grid: Grid,
) -> Walls {
    let mut cells = HashSet::with_capacity(count);
    let max_attempts = count.saturating_mul(SAMPLE_ATTEMPTS_PER_CELL);
    let mut attempts = 0;

    // Cheap path: rejection sampling, bounded so crowded grids still terminate
    while cells.len() < count && attempts < max_attempts {
        attempts += 1;
        let cell = grid.random_cell(rng);
        if is_wall_safe(cell, snake) {
            cells.insert(cell);
        }
    }

    if cells.len() < count {
        debug!(
            "Wall sampling fell back after {} attempts ({} of {} placed)",
            attempts,
            cells.len(),
            count
        );
        let mut candidates: Vec<Position> = grid
            .cells()
            .filter(|cell| is_wall_safe(*cell, snake) && !cells.contains(cell))
            .collect();
        candidates.shuffle(rng);
        let missing = count - cells.len();
        if candidates.len() < missing {
            warn!(
                "Only {} wall cells available, {} requested",
                cells.len() + candidates.len(),
                count
            );
        }
        cells.extend(candidates.into_iter().take(missing));
    }

    Walls { cells }
}
