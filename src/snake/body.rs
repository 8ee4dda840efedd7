//! The snake's occupied cells, head first.

use std::collections::{VecDeque, vec_deque};

use crate::game::{Grid, INITIAL_SNAKE_LENGTH, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Position>,
}

impl Snake {
    /// Builds a snake from head-first cells. Returns `None` for an empty body.
    #[cfg(test)]
    pub fn from_cells(cells: impl IntoIterator<Item = Position>) -> Option<Self> {
        let segments: VecDeque<Position> = cells.into_iter().collect();
        if segments.is_empty() {
            None
        } else {
            Some(Snake { segments })
        }
    }

    /// Vertical starting body near the bottom of the grid, head on top.
    pub fn initial(grid: Grid) -> Self {
        let x = grid.size / 2;
        let head_y = grid.size - INITIAL_SNAKE_LENGTH - 2;
        Snake {
            segments: (0..INITIAL_SNAKE_LENGTH)
                .map(|i| Position::new(x, head_y + i))
                .collect(),
        }
    }

    pub fn head(&self) -> Position {
        // Never empty: constructors reject empty bodies and `drop_tail` keeps the head.
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Position> {
        self.segments.iter()
    }

    pub fn push_head(&mut self, position: Position) {
        self.segments.push_front(position);
    }

    /// Removes the last segment unless it is the only one.
    pub fn drop_tail(&mut self) -> Option<Position> {
        if self.segments.len() > 1 {
            self.segments.pop_back()
        } else {
            None
        }
    }

    pub fn to_vec(&self) -> Vec<Position> {
        self.segments.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snake_on_default_grid() {
        let snake = Snake::initial(Grid::new(20));
        assert_eq!(
            snake.to_vec(),
            vec![Position::new(10, 15), Position::new(10, 16), Position::new(10, 17)]
        );
        assert_eq!(snake.head(), Position::new(10, 15));
    }

    #[test]
    fn initial_snake_fits_smallest_grid() {
        let grid = Grid::new(8);
        let snake = Snake::initial(grid);
        assert!(snake.iter().all(|cell| grid.contains(*cell)));
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(Snake::from_cells(Vec::new()).is_none());
    }

    #[test]
    fn push_then_drop_keeps_length() {
        let mut snake = Snake::initial(Grid::new(20));
        snake.push_head(Position::new(10, 14));
        assert_eq!(snake.drop_tail(), Some(Position::new(10, 17)));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(10, 14));
    }

    #[test]
    fn drop_tail_keeps_last_segment() {
        let mut snake = Snake::from_cells([Position::new(1, 1)]).unwrap();
        assert_eq!(snake.drop_tail(), None);
        assert_eq!(snake.len(), 1);
    }
}
