use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{align_to_cell, BoardConfig};
use crate::food::Food;
use crate::input::{direction_change_is_valid, Direction};
use crate::snake::{Cell, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    OutOfBounds,
    SelfCollision,
}

/// Complete mutable game state for one session.
///
/// Mutated only through [`GameState::tick`], [`GameState::set_direction`],
/// and [`GameState::reset`]; the renderer reads it immutably.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub direction: Direction,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    board: BoardConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh running game with randomized food.
    #[must_use]
    pub fn new(board: BoardConfig) -> Self {
        Self::new_with_seed(board, rand::random())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(board: BoardConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(start_cell(board));
        let food = Food::spawn(&mut rng, board);

        Self {
            snake,
            food,
            direction: Direction::Right,
            status: GameStatus::Running,
            death_reason: None,
            tick_count: 0,
            board,
            rng,
        }
    }

    /// Returns the board geometry this game runs on.
    #[must_use]
    pub fn board(&self) -> BoardConfig {
        self.board
    }

    /// Advances the simulation by one tick.
    ///
    /// The head moves one cell in the current direction and the tail is
    /// vacated. Terminal conditions are evaluated against that pre-growth
    /// body; a terminal tick commits the fatal move but performs no growth
    /// and no food relocation. Otherwise, landing on food re-attaches the
    /// vacated tail and relocates the food.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;

        let new_head = self
            .snake
            .head()
            .stepped(self.direction, self.board.cell_size);
        let vacated_tail = self.snake.advance(new_head);

        if !new_head.is_within_bounds(self.board) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::OutOfBounds);
            return;
        }

        if self.snake.head_overlaps_body() {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::SelfCollision);
            return;
        }

        if new_head == self.food.position {
            self.snake.grow_tail(vacated_tail);
            self.food = Food::spawn(&mut self.rng, self.board);
        }
    }

    /// Applies a direction request.
    ///
    /// Ignored unless the game is running; reversals directly opposite the
    /// current direction are ignored. Repeating the current direction is a
    /// no-op.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.status != GameStatus::Running {
            return;
        }

        if direction_change_is_valid(self.direction, requested) {
            self.direction = requested;
        }
    }

    /// Restores the canonical initial state, keeping board and rng.
    pub fn reset(&mut self) {
        self.snake = Snake::new(start_cell(self.board));
        self.direction = Direction::Right;
        self.food = Food::spawn(&mut self.rng, self.board);
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.tick_count = 0;
    }
}

/// Board center snapped to the cell grid; `(160, 160)` at defaults.
fn start_cell(board: BoardConfig) -> Cell {
    Cell {
        x: align_to_cell(board.width_px / 2, board.cell_size),
        y: align_to_cell(board.height_px / 2, board.cell_size),
    }
}
