//! Deterministic random number generation for opponent policies.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical choices
//! - **Per policy**: Each policy owns its generator, seeded from its config
//!
//! ```
//! use rust_boardgames::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut other = GameRng::new(42);
//!
//! let items = [1, 2, 3, 4, 5];
//! assert_eq!(rng.choose(&items), other.choose(&items));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for tie-breaking and random play.
///
/// Uses ChaCha8 so that a seeded policy always picks the same move from the
/// same position.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
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

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
