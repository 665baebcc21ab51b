use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::snake::{Position, Snake};

/// Source of uniform samples in `[0, 1)` used for food placement.
///
/// Any `FnMut() -> f64` closure qualifies, which keeps placement
/// deterministic under test.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Default pseudo-random source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: StdRng,
}

impl UniformSource {
    /// Seeds from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible source for tests and replays.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for UniformSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Picks a free cell for food, or `None` when the snake fills the board.
///
/// Free cells are enumerated in row-major order and the one at
/// `floor(sample * free_count)` is chosen.
#[must_use]
pub fn pick_food<R: RandomSource + ?Sized>(
    grid_size: u16,
    snake: &Snake,
    rng: &mut R,
) -> Option<Position> {
    let size = i32::from(grid_size);
    let mut candidates = Vec::new();

    for y in 0..size {
        for x in 0..size {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let scaled = (rng.next_unit() * candidates.len() as f64).floor() as usize;
    let index = scaled.min(candidates.len() - 1);
    Some(candidates[index])
}
