use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside a `grid_size` square board.
    #[must_use]
    pub fn is_within_bounds(self, grid_size: u16) -> bool {
        let size = i32::from(grid_size);
        self.x >= 0 && self.y >= 0 && self.x < size && self.y < size
    }

    /// Returns the neighbouring cell one step toward `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Raised when a snake would be built without any segments.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("snake body must contain at least one segment")]
pub struct EmptySnakeError;

/// Snake body as an ordered run of cells, head first.
///
/// Values are never edited in place: movement produces a new `Snake`.
/// Serialized as a plain array of positions.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Snake {
    body: VecDeque<Position>,
}

impl TryFrom<Vec<Position>> for Snake {
    type Error = EmptySnakeError;

    fn try_from(segments: Vec<Position>) -> Result<Self, Self::Error> {
        Self::from_segments(segments)
    }
}

impl From<Snake> for Vec<Position> {
    fn from(snake: Snake) -> Self {
        snake.body.into()
    }
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            body: VecDeque::from([start]),
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    pub fn from_segments(segments: Vec<Position>) -> Result<Self, EmptySnakeError> {
        if segments.is_empty() {
            return Err(EmptySnakeError);
        }
        Ok(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Returns the snake after its head moves onto `next_head`.
    ///
    /// The tail cell is dropped unless `grow` is set.
    #[must_use]
    pub fn advanced(&self, next_head: Position, grow: bool) -> Self {
        let mut body = self.body.clone();
        body.push_front(next_head);
        if !grow {
            let _ = body.pop_back();
        }
        Self { body }
    }

    /// Returns true if moving the head onto `position` would hit the body.
    ///
    /// Without growth the current tail is vacated on the same tick and does
    /// not count as an obstacle.
    #[must_use]
    pub fn blocks(&self, position: Position, will_grow: bool) -> bool {
        let occupied = if will_grow {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        self.body.iter().take(occupied).any(|segment| *segment == position)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
