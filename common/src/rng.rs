//! Seeded scalar stream shared by every randomized build step.
//!
//! Carving, repair and loop injection all draw from one [`MazeRng`] in a
//! single continuous sequence, so rebuilding with the same seed reproduces the
//! same wall layout bit for bit. The stream is ChaCha8, which is portable and
//! stable across platforms and crate releases.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic `[0, 1)` stream that can be reseeded in place.
#[derive(Debug, Clone)]
pub struct MazeRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl MazeRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Restart the stream from `seed`.
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.inner = ChaCha8Rng::seed_from_u64(seed);
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// `floor(next_f64() * count)`, for picking one of `count` candidates.
    ///
    /// Returns 0 when `count` is 0 so callers can guard emptiness separately.
    pub fn index(&mut self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let scaled = (self.next_f64() * count as f64).floor() as usize;
        scaled.min(count - 1)
    }
}
