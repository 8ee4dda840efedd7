//! Food placer - picks an empty cell for the next piece of food.

use bevy::prelude::*;
use rand::prelude::*;

use crate::game::{Grid, Position, SAMPLE_ATTEMPTS_PER_CELL};
use crate::snake::Snake;
use crate::walls::Walls;

/// Returns a random cell that is neither snake nor wall, or `None` when the board is full.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    walls: &Walls,
    grid: Grid,
) -> Option<Position> {
    let is_free = |cell: Position| !snake.contains(cell) && !walls.contains(cell);

    // Keep generating positions until we find one that doesn't overlap with the snake or walls
    let max_attempts = grid.cell_count().saturating_mul(SAMPLE_ATTEMPTS_PER_CELL);
    for _ in 0..max_attempts {
        let position = grid.random_cell(rng);
        if is_free(position) {
            return Some(position);
        }
    }

    debug!("Food sampling fell back to scanning free cells");
    let free: Vec<Position> = grid.cells().filter(|cell| is_free(*cell)).collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walls::generate_walls;
    use rand::rngs::StdRng;

    #[test]
    fn food_avoids_snake_and_walls() {
        let grid = Grid::new(20);
        let snake = Snake::initial(grid);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let walls = generate_walls(&mut rng, &snake, 15, grid);
            let food = place_food(&mut rng, &snake, &walls, grid).unwrap();
            assert!(grid.contains(food));
            assert!(!snake.contains(food));
            assert!(!walls.contains(food));
        }
    }

    #[test]
    fn finds_the_only_free_cell() {
        let grid = Grid::new(8);
        let snake = Snake::initial(grid);
        let hole = Position::new(0, 0);
        let walls: Walls = grid
            .cells()
            .filter(|cell| *cell != hole && !snake.contains(*cell))
            .collect();
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(place_food(&mut rng, &snake, &walls, grid), Some(hole));
    }

    #[test]
    fn full_board_has_no_food() {
        let grid = Grid::new(8);
        let snake = Snake::initial(grid);
        let walls: Walls = grid.cells().filter(|cell| !snake.contains(*cell)).collect();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(place_food(&mut rng, &snake, &walls, grid), None);
    }
}
