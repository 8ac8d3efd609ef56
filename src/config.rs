use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::Direction;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the cell the initial snake head is placed on.
    #[must_use]
    pub fn center(self) -> (i32, i32) {
        (i32::from(self.width / 2), i32::from(self.height / 2))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Everything `GameState::reset` needs to lay out a new game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub initial_length: usize,
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            initial_length: DEFAULT_INITIAL_LENGTH,
            initial_direction: Direction::Right,
        }
    }
}

impl GameConfig {
    /// Checks that the grid is non-empty and the starting snake fits on it.
    ///
    /// The snake is laid out backwards from the center, so its length is
    /// bounded by the room behind the center cell along the initial
    /// direction, and by the shorter grid side.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridSize { width, height } = self.grid;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidGrid { width, height });
        }

        let max = self.max_initial_length();
        if self.initial_length == 0 || self.initial_length > max {
            return Err(ConfigError::InvalidInitialLength {
                length: self.initial_length,
                max,
            });
        }

        Ok(())
    }

    /// Longest snake whose every segment lands on the grid after a reset.
    #[must_use]
    pub fn max_initial_length(&self) -> usize {
        let GridSize { width, height } = self.grid;
        let trailing_room = match self.initial_direction {
            Direction::Right => width / 2 + 1,
            Direction::Left => width - width / 2,
            Direction::Up => height / 2 + 1,
            Direction::Down => height - height / 2,
        };
        let shorter_side = width.min(height).saturating_sub(1);

        usize::from(trailing_room.min(shorter_side))
    }
}

/// Named speed presets offered at startup.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All presets in menu order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Real-time gap between two simulation steps.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(200),
            Self::Medium => Duration::from_millis(150),
            Self::Hard => Duration::from_millis(100),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }

    /// Key typed at the startup prompt to pick this preset.
    #[must_use]
    pub fn menu_key(self) -> char {
        match self {
            Self::Easy => '1',
            Self::Medium => '2',
            Self::Hard => '3',
        }
    }

    #[must_use]
    pub fn squares_per_second(self) -> f64 {
        1.0 / self.tick_interval().as_secs_f64()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    /// Accepts either the menu key (`1`..`3`) or the preset name in any case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| {
                (trimmed.len() == 1 && trimmed.starts_with(difficulty.menu_key()))
                    || trimmed.eq_ignore_ascii_case(difficulty.name())
            })
            .ok_or_else(|| ConfigError::UnknownDifficulty(trimmed.to_owned()))
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Segments in a freshly reset snake.
pub const DEFAULT_INITIAL_LENGTH: usize = 3;

/// Terminal columns used to draw one grid cell, keeping cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Upper bound on how long the frame loop waits for input.
pub const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Difficulty, GameConfig, GridSize};
    use crate::error::ConfigError;
    use crate::input::Direction;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert_eq!(config.grid.width, 30);
        assert_eq!(config.grid.height, 20);
        assert_eq!(config.initial_length, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn initial_length_must_fit_shorter_side() {
        let config = GameConfig {
            grid: GridSize {
                width: 10,
                height: 4,
            },
            initial_length: 4,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInitialLength { length: 4, max: 3 })
        ));
    }

    #[test]
    fn initial_length_must_fit_behind_center() {
        for initial_direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let config = GameConfig {
                grid: GridSize {
                    width: 5,
                    height: 5,
                },
                initial_length: 4,
                initial_direction,
            };

            assert!(
                config.validate().is_err(),
                "length 4 overflows a 5x5 grid facing {initial_direction:?}"
            );
            assert_eq!(config.max_initial_length(), 3);
        }
    }

    #[test]
    fn trailing_room_depends_on_direction() {
        let config = |initial_direction| GameConfig {
            grid: GridSize {
                width: 4,
                height: 9,
            },
            initial_length: 2,
            initial_direction,
        };

        assert_eq!(config(Direction::Right).max_initial_length(), 3);
        assert_eq!(config(Direction::Left).max_initial_length(), 2);
        assert!(config(Direction::Left).validate().is_ok());
    }

    #[test]
    fn empty_grid_is_rejected() {
        let config = GameConfig {
            grid: GridSize {
                width: 0,
                height: 5,
            },
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn difficulty_presets_map_to_intervals() {
        assert_eq!(Difficulty::Easy.tick_interval(), Duration::from_millis(200));
        assert_eq!(
            Difficulty::Medium.tick_interval(),
            Duration::from_millis(150)
        );
        assert_eq!(Difficulty::Hard.tick_interval(), Duration::from_millis(100));
        assert!((Difficulty::Hard.squares_per_second() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn difficulty_parses_keys_and_names() {
        assert_eq!("1".parse::<Difficulty>().ok(), Some(Difficulty::Easy));
        assert_eq!(" 3 \n".parse::<Difficulty>().ok(), Some(Difficulty::Hard));
        assert_eq!(
            "medium".parse::<Difficulty>().ok(),
            Some(Difficulty::Medium)
        );
        assert!("4".parse::<Difficulty>().is_err());
        assert!("".parse::<Difficulty>().is_err());
        assert!("12".parse::<Difficulty>().is_err());
    }
}
