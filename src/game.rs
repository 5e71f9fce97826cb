use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::RESET_DELAY;
use crate::food;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, InputBuffer, InputEvent};
use crate::score::ScoreStore;
use crate::snake::Snake;

/// Current screen-level mode. Exactly one is live at a time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Start,
    Playing,
    Paused,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    /// The snake covered every food-eligible cell.
    BoardFull,
}

/// Deterministic game core: state machine plus tick engine.
///
/// The host enqueues input events at arbitrary times and calls
/// [`Game::tick`] at a fixed rate; all mutation happens inside that
/// call. The delayed return to the start screen after a game over is
/// emitted as a one-shot request ([`Game::take_reset_request`]) and
/// fulfilled by the host's timer ([`Game::fulfill_reset`]), never by
/// blocking inside a tick.
#[derive(Debug)]
pub struct Game {
    pub snake: Snake,
    pub food: Option<Cell>,
    pub score: u32,
    grid: Grid,
    direction: Direction,
    pending_direction: Direction,
    high_score: u32,
    mode: Mode,
    game_over_reason: Option<GameOverReason>,
    reset_request: Option<Duration>,
    input: InputBuffer,
    rng: StdRng,
    store: Box<dyn ScoreStore>,
}

impl Game {
    /// Creates a game on `grid`, loading the high score from `store`.
    #[must_use]
    pub fn new(grid: Grid, store: Box<dyn ScoreStore>) -> Self {
        Self::with_rng(grid, store, StdRng::from_entropy())
    }

    /// Deterministic constructor for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(grid: Grid, store: Box<dyn ScoreStore>, seed: u64) -> Self {
        Self::with_rng(grid, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, store: Box<dyn ScoreStore>, rng: StdRng) -> Self {
        let high_score = store.load();

        Self {
            snake: Snake::new(grid.center()),
            food: None,
            score: 0,
            grid,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            high_score,
            mode: Mode::Start,
            game_over_reason: None,
            reset_request: None,
            input: InputBuffer::default(),
            rng,
            store,
        }
    }

    /// Buffers one external event. Safe to call between ticks.
    pub fn enqueue(&mut self, event: InputEvent) {
        self.input.enqueue(event);
    }

    /// Advances the simulation by one driver tick.
    ///
    /// Buffered input is drained exactly once, start and pause requests
    /// are applied, and when the game is in play the snake takes one
    /// movement step. Paused, start-screen, and game-over ticks mutate
    /// nothing beyond the requested transitions.
    pub fn tick(&mut self) {
        let drained = self.input.drain();

        if let Some(direction) = drained.direction {
            self.pending_direction = direction;
        }

        if drained.start_requested && matches!(self.mode, Mode::Start | Mode::GameOver) {
            // A start during game over short-circuits the delayed reset.
            self.start_game();
            return;
        }

        if drained.pause_toggled && matches!(self.mode, Mode::Playing | Mode::Paused) {
            // Mode transitions consume the tick; movement resumes on the next one.
            self.mode = match self.mode {
                Mode::Playing => Mode::Paused,
                _ => Mode::Playing,
            };
            return;
        }

        if self.mode == Mode::Playing {
            self.advance();
        }
    }

    /// Resets the board and enters play. The starting tick is consumed
    /// by the reset; movement begins on the following tick.
    fn start_game(&mut self) {
        self.snake = Snake::new(self.grid.center());
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.game_over_reason = None;
        self.reset_request = None;
        self.food = food::place(&mut self.rng, self.grid, &self.snake);
        self.mode = Mode::Playing;
    }

    /// One movement step: direction resolution, head projection,
    /// collision test, commit, food test.
    fn advance(&mut self) {
        // A reversal request keeps the current travel direction.
        if self.pending_direction != self.direction.opposite() {
            self.direction = self.pending_direction;
        }

        let candidate = self.snake.head().step(self.direction);

        if !self.grid.contains(candidate) {
            self.end_game(GameOverReason::WallCollision);
            return;
        }
        if self.snake.hits_body(candidate) {
            self.end_game(GameOverReason::SelfCollision);
            return;
        }

        self.snake.push_head(candidate);

        if self.food == Some(candidate) {
            self.score += 1;
            self.food = food::place(&mut self.rng, self.grid, &self.snake);
            if self.food.is_none() {
                self.end_game(GameOverReason::BoardFull);
            }
        } else {
            self.snake.pop_tail();
        }
    }

    fn end_game(&mut self, reason: GameOverReason) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.save(self.high_score);
        }
        self.game_over_reason = Some(reason);
        self.mode = Mode::GameOver;
        self.reset_request = Some(RESET_DELAY);
    }

    /// Takes the pending one-shot reset request for the host to schedule.
    pub fn take_reset_request(&mut self) -> Option<Duration> {
        self.reset_request.take()
    }

    /// Fulfills a previously requested delayed reset.
    ///
    /// Returns to the start screen, keeping the last score on display
    /// until the next game begins. A stale fulfillment after the player
    /// has already restarted is a no-op.
    pub fn fulfill_reset(&mut self) {
        if self.mode != Mode::GameOver {
            return;
        }
        self.snake = Snake::new(self.grid.center());
        self.food = None;
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.game_over_reason = None;
        self.mode = Mode::Start;
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the persisted-record high score.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Returns why the last game ended, while in game over.
    #[must_use]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    /// Returns the playable geometry.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }
}
