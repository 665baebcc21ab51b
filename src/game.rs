use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::GameConfig;
use crate::food::{pick_food, RandomSource};
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Waiting for the first direction input.
    Idle,
    Running,
    Paused,
    /// Terminal until restarted.
    GameOver,
}

/// Why a running game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    Wall,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFull,
}

/// Complete game state for one session.
///
/// Every transition returns a new value and leaves its input untouched.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub grid_size: u16,
    pub snake: Snake,
    /// Direction applied by the most recent step.
    pub direction: Direction,
    /// Direction the next step will use.
    pub next_direction: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
}

impl GameState {
    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.snake.head()
    }

    fn ended(&self, direction: Direction, reason: EndReason) -> Self {
        debug!(
            ?reason,
            score = self.score,
            length = self.snake.len(),
            "game over"
        );
        Self {
            direction,
            status: GameStatus::GameOver,
            end_reason: Some(reason),
            ..self.clone()
        }
    }
}

/// Builds a fresh idle game with a one-cell snake in the centre of the board.
///
/// A grid size of 0 is treated as 1.
#[must_use]
pub fn create_initial_state<R: RandomSource + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> GameState {
    let grid_size = config.grid_size.max(1);
    let centre = i32::from(grid_size / 2);
    let snake = Snake::new(Position::new(centre, centre));
    let food = pick_food(grid_size, &snake, rng);

    GameState {
        grid_size,
        snake,
        direction: Direction::Right,
        next_direction: Direction::Right,
        food,
        score: 0,
        status: GameStatus::Idle,
        end_reason: None,
    }
}

/// Queues `direction` for the next step.
///
/// Reversing the queued direction is ignored. The first accepted input
/// starts an idle game.
#[must_use]
pub fn set_direction(state: &GameState, direction: Direction) -> GameState {
    if !direction_change_is_valid(state.next_direction, direction) {
        trace!(%direction, queued = %state.next_direction, "ignoring reversal");
        return state.clone();
    }

    let status = match state.status {
        GameStatus::Idle => GameStatus::Running,
        other => other,
    };

    GameState {
        next_direction: direction,
        status,
        ..state.clone()
    }
}

/// Like [`set_direction`], for a symbolic name such as `"up"`.
///
/// Unrecognized names leave the state unchanged.
#[must_use]
pub fn set_direction_named(state: &GameState, name: &str) -> GameState {
    match name.parse::<Direction>() {
        Ok(direction) => set_direction(state, direction),
        Err(error) => {
            trace!(%error, "ignoring direction input");
            state.clone()
        }
    }
}

/// Flips between running and paused; other statuses are unchanged.
#[must_use]
pub fn toggle_pause(state: &GameState) -> GameState {
    let status = match state.status {
        GameStatus::Running => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Running,
        other => {
            trace!(status = ?other, "pause toggle has no effect");
            return state.clone();
        }
    };

    GameState {
        status,
        ..state.clone()
    }
}

/// Starts over on the current board size unless `grid_size` overrides it.
#[must_use]
pub fn restart_state<R: RandomSource + ?Sized>(
    state: &GameState,
    grid_size: Option<u16>,
    rng: &mut R,
) -> GameState {
    let config = GameConfig::with_grid_size(grid_size.unwrap_or(state.grid_size));
    create_initial_state(&config, rng)
}

/// Advances a running game by one tick; any other status is a no-op.
#[must_use]
pub fn step_state<R: RandomSource + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    if state.status != GameStatus::Running {
        return state.clone();
    }

    let direction = state.next_direction;
    let head = state.head().stepped(direction);

    if !head.is_within_bounds(state.grid_size) {
        return state.ended(direction, EndReason::Wall);
    }

    let will_grow = state.food == Some(head);
    if state.snake.blocks(head, will_grow) {
        return state.ended(direction, EndReason::SelfCollision);
    }

    let snake = state.snake.advanced(head, will_grow);
    let moved = GameState {
        direction,
        next_direction: direction,
        ..state.clone()
    };

    if !will_grow {
        return GameState { snake, ..moved };
    }

    let food = pick_food(state.grid_size, &snake, rng);
    let grown = GameState {
        snake,
        food,
        score: state.score + 1,
        ..moved
    };

    match food {
        Some(_) => grown,
        None => grown.ended(direction, EndReason::BoardFull),
    }
}

/// Routes one controller event to the matching transition.
#[must_use]
pub fn apply_input<R: RandomSource + ?Sized>(
    state: &GameState,
    input: GameInput,
    rng: &mut R,
) -> GameState {
    match input {
        GameInput::Direction(direction) => set_direction(state, direction),
        GameInput::Pause => toggle_pause(state),
        GameInput::Tick => step_state(state, rng),
        GameInput::Restart => restart_state(state, None, rng),
    }
}
