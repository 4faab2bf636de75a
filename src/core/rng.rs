//! Deterministic random number generation for generated positions.
//!
//! Same seed, same sequence, same position.
//!
//! ```
//! use hackenbush::core::PositionRng;
//!
//! let mut a = PositionRng::new(42);
//! let mut b = PositionRng::new(42);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::color::Color;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct PositionRng {
    inner: ChaCha8Rng,
}

impl PositionRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Pick a stick color, red with probability `red_probability`.
    pub fn gen_color(&mut self, red_probability: f64) -> Color {
        if self.inner.gen_bool(red_probability) {
            Color::Red
        } else {
            Color::Blue
        }
    }
}
