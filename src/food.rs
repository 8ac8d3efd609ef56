use rand::Rng;

use crate::config::GridSize;
use crate::error::GameError;
use crate::snake::{Position, Snake};

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Places food on a random cell the snake does not cover.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Result<Self, GameError> {
        spawn_position(rng, bounds, snake).map(Self::new)
    }
}

/// Samples uniformly random cells until one is free of the snake.
///
/// Fails with [`GameError::BoardFull`] when the snake already covers the
/// whole grid, since sampling could never succeed.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Result<Position, GameError> {
    if snake.len() >= bounds.total_cells() {
        return Err(GameError::BoardFull {
            width: bounds.width,
            height: bounds.height,
        });
    }

    loop {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };

        if !snake.occupies(candidate) {
            return Ok(candidate);
        }
    }
}
