use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::{GameConfig, GridSize};
use crate::error::GameError;
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
    /// The snake filled the board and no food can be placed.
    Victory,
}

impl GameStatus {
    /// Returns true for states only a reset can leave.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What a single call to [`GameState::step`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The game is not running; nothing changed.
    Idle,
    Moved,
    Ate,
    Collided(DeathReason),
    /// Food was eaten but the board has no free cell left.
    BoardFull,
}

/// Read-only snapshot handed to the renderer once per frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderModel {
    /// Segments from head to tail.
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Food>,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Starts a new game with an entropy-seeded food generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid game config: {config:?}");

        let mut state = Self {
            snake: Snake::new(Position::new(0, 0), config.initial_direction, 1),
            food: None,
            score: 0,
            status: GameStatus::Playing,
            death_reason: None,
            tick_count: 0,
            config,
            rng,
        };
        state.reset();
        state
    }

    /// Reinitialises every entity to its start-of-game value.
    pub fn reset(&mut self) {
        let (x, y) = self.config.grid.center();
        self.snake = Snake::new(
            Position::new(x, y),
            self.config.initial_direction,
            self.config.initial_length,
        );
        self.score = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.tick_count = 0;
        self.place_food();

        info!(head = ?self.snake.head(), food = ?self.food, "game reset, score: 0");
    }

    /// Queues a turn for the next step; ignored outside play and for
    /// reversals of the latest accepted direction.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.status != GameStatus::Playing {
            return;
        }

        if !self.snake.set_direction(requested) {
            debug!(?requested, "reversal ignored");
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Playing {
            return StepOutcome::Idle;
        }

        let new_head = self.snake.next_head_position();

        if !new_head.is_within_bounds(self.config.grid) {
            return self.end_game(DeathReason::WallCollision);
        }

        if self.snake.body_contains(new_head) {
            return self.end_game(DeathReason::SelfCollision);
        }

        self.tick_count += 1;
        let ate = self.food.is_some_and(|food| food.position == new_head);
        self.snake.advance(ate);

        if !ate {
            return StepOutcome::Moved;
        }

        self.score += 1;
        if self.place_food() {
            StepOutcome::Ate
        } else {
            StepOutcome::BoardFull
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.set_direction(direction),
            GameInput::Restart => {
                if self.status.is_terminal() {
                    self.reset();
                }
            }
            GameInput::Quit => {}
        }
    }

    #[must_use]
    pub fn render_model(&self) -> RenderModel {
        RenderModel {
            snake: self.snake.segments().copied().collect(),
            food: self.food.map(|food| food.position),
            score: self.score,
            status: self.status,
            death_reason: self.death_reason,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn end_game(&mut self, reason: DeathReason) -> StepOutcome {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        debug!(?reason, score = self.score, "collision");
        StepOutcome::Collided(reason)
    }

    /// Returns false when the board is full, which ends the game as a win.
    fn place_food(&mut self) -> bool {
        match Food::spawn(&mut self.rng, self.config.grid, &self.snake) {
            Ok(food) => {
                self.food = Some(food);
                true
            }
            Err(GameError::BoardFull { .. }) => {
                self.food = None;
                self.status = GameStatus::Victory;
                false
            }
        }
    }
}
