//! Tunable parameters of a [`crate::models::snake::snake_game::SnakeGame`].

use super::snake_game::{Result, SnakeError};

/// Side length of the default square board.
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Milliseconds between ticks at the start of a game.
pub const DEFAULT_INITIAL_INTERVAL: u64 = 150;
/// Milliseconds shaved off the interval for every food eaten.
pub const DEFAULT_INTERVAL_STEP: u64 = 10;
/// The interval never drops below this.
pub const DEFAULT_MIN_INTERVAL: u64 = 50;
/// Min board size.
pub const MIN_BOARD_SIZE: usize = 5;
/// Max board size.
pub const MAX_BOARD_SIZE: usize = 40;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeConfig {
    board_size: usize,
    initial_interval: u64,
    interval_step: u64,
    min_interval: u64,
}

impl SnakeConfig {
    /// Creates a config with the given board size and speed ramp.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidBoardSize`] if the board size is outside
    /// `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`, and [`SnakeError::InvalidInterval`]
    /// if the floor or step is zero or the initial interval is below the floor.
    pub fn new(
        board_size: usize,
        initial_interval: u64,
        interval_step: u64,
        min_interval: u64,
    ) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(SnakeError::InvalidBoardSize(board_size));
        }
        if min_interval == 0 || interval_step == 0 || initial_interval < min_interval {
            return Err(SnakeError::InvalidInterval);
        }
        Ok(Self {
            board_size,
            initial_interval,
            interval_step,
            min_interval,
        })
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[must_use]
    pub fn initial_interval(&self) -> u64 {
        self.initial_interval
    }

    #[must_use]
    pub fn interval_step(&self) -> u64 {
        self.interval_step
    }

    #[must_use]
    pub fn min_interval(&self) -> u64 {
        self.min_interval
    }

    /// Interval to use after one more food has been eaten.
    #[must_use]
    pub fn next_interval(&self, current: u64) -> u64 {
        current
            .saturating_sub(self.interval_step)
            .max(self.min_interval)
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            initial_interval: DEFAULT_INITIAL_INTERVAL,
            interval_step: DEFAULT_INTERVAL_STEP,
            min_interval: DEFAULT_MIN_INTERVAL,
        }
    }
}
