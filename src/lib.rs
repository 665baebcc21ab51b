//! State-transition core for grid-based Snake.
//!
//! Every operation takes the current [`GameState`] by reference and returns
//! the next one. Rendering, timing and input capture belong to the caller.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod snake;

pub use config::{ConfigError, GameConfig, DEFAULT_GRID_SIZE};
pub use food::{pick_food, RandomSource, UniformSource};
pub use game::{
    apply_input, create_initial_state, restart_state, set_direction, set_direction_named,
    step_state, toggle_pause, EndReason, GameState, GameStatus,
};
pub use input::{Direction, GameInput, ParseDirectionError};
pub use snake::{EmptySnakeError, Position, Snake};
