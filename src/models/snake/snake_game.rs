use std::collections::{HashSet, VecDeque};

use log::{debug, info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::snake_config::SnakeConfig;

pub type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    InvalidBoardSize(usize),
    InvalidInterval,
    EmptySnake,
    CellOutOfBounds(Cell),
    DuplicateCell(Cell),
    FoodOnSnake(Cell),
}

impl std::fmt::Display for SnakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnakeError::InvalidBoardSize(size) => write!(f, "invalid board size {size}"),
            SnakeError::InvalidInterval => write!(f, "invalid tick interval settings"),
            SnakeError::EmptySnake => write!(f, "snake must have at least one cell"),
            SnakeError::CellOutOfBounds(cell) => write!(f, "cell {cell} is outside the board"),
            SnakeError::DuplicateCell(cell) => write!(f, "snake occupies {cell} twice"),
            SnakeError::FoodOnSnake(cell) => write!(f, "food at {cell} is under the snake"),
        }
    }
}

impl std::error::Error for SnakeError {}

/// A square on the board. `x` grows to the right and `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    #[must_use]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell along `heading` on a board of side `size`.
    /// Leaving one edge re-enters from the opposite one.
    #[must_use]
    pub fn step(self, heading: Heading, size: usize) -> Self {
        match heading {
            Heading::Up => Self::new(self.x, (self.y + size - 1) % size),
            Heading::Down => Self::new(self.x, (self.y + 1) % size),
            Heading::Left => Self::new((self.x + size - 1) % size, self.y),
            Heading::Right => Self::new((self.x + 1) % size, self.y),
        }
    }

    #[must_use]
    pub fn is_within(self, size: usize) -> bool {
        self.x < size && self.y < size
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction the snake is travelling in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const VARIANTS: &'static [Heading] = &[Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(dx, dy)` of one move in this heading.
    #[must_use]
    pub fn value(self) -> (i8, i8) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn get_opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// Type of block that can be found on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeBlock {
    Empty,
    Food,
    SnakeBody,
    SnakeHead,
}

/// What a single [`SnakeGame::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved one cell without eating.
    Moved,
    /// The snake ate the food. Carries the new score.
    Ate { score: u32 },
    /// The snake ran into itself and the game is now over.
    Collided,
    /// The game was already over, nothing changed.
    Finished,
}

/// Model of the Snake Game.
#[derive(Clone, Debug)]
pub struct SnakeGame {
    config: SnakeConfig,
    snake: VecDeque<Cell>,
    // latest requested heading, consumed by the next tick
    heading: Heading,
    last_moved: Heading,
    food: Cell,
    score: u32,
    interval: u64,
    game_over: bool,
    rng: StdRng,
}

impl SnakeGame {
    /// Starts a game with food placement seeded from the OS.
    #[must_use]
    pub fn new(config: SnakeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Starts a game whose food positions are reproducible for a given seed.
    #[must_use]
    pub fn with_seed(config: SnakeConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SnakeConfig, rng: StdRng) -> Self {
        let center = Self::center(&config);
        let mut new_game = Self {
            interval: config.initial_interval(),
            config,
            snake: VecDeque::from([center]),
            heading: Heading::Right,
            last_moved: Heading::Right,
            food: center,
            score: 0,
            game_over: false,
            rng,
        };
        new_game.reset();
        new_game
    }

    /// Builds a live game from an explicit position.
    ///
    /// `body` is head first. Score starts at zero and the interval at the
    /// configured initial value.
    ///
    /// # Errors
    ///
    /// Returns a [`SnakeError`] if the body is empty, any cell lies outside
    /// the board, the body covers a cell twice or the food is under the snake.
    pub fn from_parts(
        config: SnakeConfig,
        body: Vec<Cell>,
        heading: Heading,
        food: Cell,
        seed: u64,
    ) -> Result<Self> {
        if body.is_empty() {
            return Err(SnakeError::EmptySnake);
        }
        let size = config.board_size();
        let mut seen = HashSet::with_capacity(body.len());
        for cell in &body {
            if !cell.is_within(size) {
                return Err(SnakeError::CellOutOfBounds(*cell));
            }
            if !seen.insert(*cell) {
                return Err(SnakeError::DuplicateCell(*cell));
            }
        }
        if !food.is_within(size) {
            return Err(SnakeError::CellOutOfBounds(food));
        }
        if seen.contains(&food) {
            return Err(SnakeError::FoodOnSnake(food));
        }
        Ok(Self {
            interval: config.initial_interval(),
            config,
            snake: body.into(),
            heading,
            last_moved: heading,
            food,
            score: 0,
            game_over: false,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn center(config: &SnakeConfig) -> Cell {
        let middle = config.board_size() / 2;
        Cell::new(middle, middle)
    }

    /// Puts the game back to its starting position with fresh food.
    pub fn reset(&mut self) {
        self.snake = VecDeque::from([Self::center(&self.config)]);
        self.heading = Heading::Right;
        self.last_moved = Heading::Right;
        self.score = 0;
        self.interval = self.config.initial_interval();
        self.game_over = false;
        self.place_food();
        info!("New game started. Food at {}", self.food);
    }

    /// Picks a uniformly random cell that the snake does not cover.
    /// Returns `None` when the snake fills the whole board.
    fn random_free_cell(&mut self) -> Option<Cell> {
        let size = self.config.board_size();
        if self.snake.len() >= size * size {
            return None;
        }
        loop {
            let cell = Cell::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
            if !self.snake.contains(&cell) {
                return Some(cell);
            }
        }
    }

    fn place_food(&mut self) {
        if let Some(cell) = self.random_free_cell() {
            self.food = cell;
        } else {
            warn!("No where left to place food. Ending game");
            self.game_over = true;
        }
    }

    /// Requests a new heading for the next tick.
    ///
    /// Returns false and leaves the heading alone when the request would turn
    /// the snake straight back on itself, or when the game is over.
    pub fn turn(&mut self, heading: Heading) -> bool {
        if self.game_over {
            return false;
        }
        if heading == self.heading.get_opposite() || heading == self.last_moved.get_opposite() {
            debug!(
                "Ignoring turn to {:?} while heading {:?}",
                heading, self.heading
            );
            return false;
        }
        self.heading = heading;
        true
    }

    /// Advances the game by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Finished;
        }
        let Some(head) = self.head() else {
            warn!("Ticked a snake with no cells");
            self.game_over = true;
            return TickOutcome::Finished;
        };
        let new_head = head.step(self.heading, self.config.board_size());
        if self.snake.contains(&new_head) {
            info!(
                "Game over. Snake ran into itself at {new_head} with score {}",
                self.score
            );
            self.game_over = true;
            return TickOutcome::Collided;
        }

        self.snake.push_front(new_head);
        self.last_moved = self.heading;
        if new_head == self.food {
            self.score += 1;
            self.interval = self.config.next_interval(self.interval);
            debug!(
                "Food eaten at {new_head}. Score {} and interval {}ms",
                self.score, self.interval
            );
            self.place_food();
            TickOutcome::Ate { score: self.score }
        } else {
            if self.snake.pop_back().is_none() {
                debug!("Removed from back but got None");
            }
            TickOutcome::Moved
        }
    }

    /// Snapshot of the board, indexed `[y][x]`.
    #[must_use]
    pub fn get_grid(&self) -> Vec<Vec<SnakeBlock>> {
        let size = self.config.board_size();
        let mut grid = vec![vec![SnakeBlock::Empty; size]; size];
        grid[self.food.y][self.food.x] = SnakeBlock::Food;
        for (i, cell) in self.snake.iter().enumerate() {
            grid[cell.y][cell.x] = if i == 0 {
                SnakeBlock::SnakeHead
            } else {
                SnakeBlock::SnakeBody
            };
        }
        grid
    }

    #[must_use]
    pub fn head(&self) -> Option<Cell> {
        self.snake.front().copied()
    }

    #[must_use]
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Milliseconds until the next tick.
    #[must_use]
    pub fn interval(&self) -> u64 {
        self.interval
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn get_size(&self) -> usize {
        self.config.board_size()
    }

    #[must_use]
    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    #[cfg(test)]
    fn set_food(&mut self, cell: Cell) {
        self.food = cell;
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new(SnakeConfig::default())
    }
}
