//! The simulation aggregate: everything one game mutates, advanced one tick at a time.

use bevy::prelude::*;
use rand::Rng;

use super::{Direction, FOOD_SCORE, GameConfig, GamePhase, Grid, InputBuffer, Position};
use crate::food::place_food;
use crate::snake::Snake;
use crate::walls::{Walls, generate_walls};

/// Why a running game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Wall,
    SelfCollision,
    /// The snake ate the last food and no free cell is left for the next one.
    /// The eaten food still scores, but the frozen board keeps `food` on the
    /// head's cell and no pickup is reported for it.
    BoardFull,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running; nothing changed.
    Idle,
    Moved,
    Ate { position: Position },
    Crashed { score: u32, cause: CrashCause },
}

/// Read-only view handed to the render adapter each frame.
pub struct RenderSnapshot<'a> {
    pub grid: Grid,
    pub phase: GamePhase,
    pub walls: &'a Walls,
    pub food: Position,
    pub snake: &'a Snake,
    pub previous_snake: &'a [Position],
    pub score: u32,
}

/// Main game state resource.
#[derive(Resource, Debug)]
pub struct GameState {
    phase: GamePhase,
    grid: Grid,
    wall_count: usize,
    snake: Snake,
    previous_snake: Vec<Position>,
    walls: Walls,
    food: Position,
    score: u32,
    velocity: Direction,
    input_buffer: InputBuffer,
}

impl GameState {
    /// Lays out a fresh board without starting play.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let grid = Grid::new(config.grid_size);
        let snake = Snake::initial(grid);
        let mut state = GameState {
            phase: GamePhase::NotStarted,
            grid,
            wall_count: config.wall_count,
            previous_snake: snake.to_vec(),
            food: snake.head(),
            snake,
            walls: Walls::default(),
            score: 0,
            velocity: Direction::Up,
            input_buffer: InputBuffer::default(),
        };
        state.reset(rng);
        state
    }

    fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.snake = Snake::initial(self.grid);
        self.previous_snake = self.snake.to_vec();
        self.velocity = Direction::Up;
        self.input_buffer.clear();
        self.score = 0;
        self.walls = generate_walls(rng, &self.snake, self.wall_count, self.grid);
        // A valid config always leaves free cells on a fresh board.
        self.food = place_food(rng, &self.snake, &self.walls, self.grid)
            .unwrap_or_else(|| self.grid.wrap_position(0, 0));
    }

    /// Begins a new game. Does nothing and returns `false` while a game is running.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.phase.is_running() {
            return false;
        }
        self.reset(rng);
        self.phase = GamePhase::Running;
        info!(
            "Game started with {} walls, food at {:?}",
            self.walls.len(),
            self.food
        );
        true
    }

    /// Buffers a turn for the next tick. Reversing into the neck, or any input
    /// while the game is not running, is ignored.
    pub fn propose_direction(&mut self, direction: Direction) -> bool {
        if !self.phase.is_running() || direction == self.velocity.opposite() {
            return false;
        }
        self.input_buffer.queue_direction(direction);
        true
    }

    /// Advances the simulation by one cell.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.phase.is_running() {
            return TickOutcome::Idle;
        }

        if let Some(direction) = self.input_buffer.take_direction() {
            self.velocity = direction;
        }

        let next_head = self.grid.step(self.snake.head(), self.velocity);

        if self.walls.contains(next_head) {
            return self.crash(CrashCause::Wall);
        }
        if self.snake.contains(next_head) {
            return self.crash(CrashCause::SelfCollision);
        }

        self.previous_snake = self.snake.to_vec();
        self.snake.push_head(next_head);

        if next_head == self.food {
            self.score += FOOD_SCORE;
            let eaten = self.food;
            match place_food(rng, &self.snake, &self.walls, self.grid) {
                Some(food) => self.food = food,
                None => return self.crash(CrashCause::BoardFull),
            }
            TickOutcome::Ate { position: eaten }
        } else {
            self.snake.drop_tail();
            TickOutcome::Moved
        }
    }

    fn crash(&mut self, cause: CrashCause) -> TickOutcome {
        self.phase = GamePhase::GameOver;
        // Freeze the drawing on the last committed frame.
        self.previous_snake = self.snake.to_vec();
        info!(
            "Game Over! Final score: {} with length {} ({:?})",
            self.score,
            self.snake.len(),
            cause
        );
        TickOutcome::Crashed {
            score: self.score,
            cause,
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            grid: self.grid,
            phase: self.phase,
            walls: &self.walls,
            food: self.food,
            snake: &self.snake,
            previous_snake: &self.previous_snake,
            score: self.score,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn velocity(&self) -> Direction {
        self.velocity
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
impl GameState {
    /// Replaces the random layout with a hand-placed one.
    pub(crate) fn arrange(&mut self, snake: &[(i32, i32)], walls: &[(i32, i32)], food: (i32, i32)) {
        self.snake = Snake::from_cells(snake.iter().map(|&(x, y)| Position::new(x, y)))
            .expect("arranged snake needs a head");
        self.previous_snake = self.snake.to_vec();
        self.walls = walls.iter().map(|&(x, y)| Position::new(x, y)).collect();
        self.food = Position::new(food.0, food.1);
    }

    pub(crate) fn snake_cells(&self) -> Vec<(i32, i32)> {
        self.snake.iter().map(|p| (p.x, p.y)).collect()
    }
}
