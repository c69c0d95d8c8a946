//! Random Source Module
//!
//! Seedable pseudo-random source used by every generator. The seed is kept
//! alongside the generator state so a run can be rewound and replayed.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

// == Random Source ==
/// Deterministic random source backed by ChaCha8.
///
/// The same seed always yields the same sequence of draws.
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomSource {
    // == Constructors ==
    /// Creates a source seeded from entropy. The chosen seed is retained so
    /// `reset` can replay the sequence.
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Creates a source with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a seeded source when `seed` is set, an entropy-seeded one otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    // == Seeding ==
    /// Returns the seed of the current sequence.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the seed and restarts the sequence from it.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::seeded(seed);
    }

    /// Rewinds the sequence to the start of the current seed.
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    // == Draws ==
    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform integer in `[min, max)`. Returns `min` for an empty range.
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }

    /// Uniform integer in `[min, max]`. Returns `min` when `max < min`.
    pub fn int_inclusive(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// Uniform float in `[min, max)`.
    pub fn float_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns true with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Picks one element uniformly, or None for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }

    /// Fills a 16-byte buffer, used to build random UUIDs.
    pub fn bytes16(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}
