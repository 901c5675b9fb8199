//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate's `StdRng` and
//! exposes the draws a bit-string genetic algorithm needs: uniform integers
//! for genome sampling and parent picking, and weighted coin flips for
//! crossover and mutation decisions.
//!
//! ## Example
//!
//! ```rust
//! use archipelago::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::new();
//! let code = rng.gen_inclusive(0, 15);
//! assert!(code <= 15);
//! ```
//!
//! ## Thread-safe RNG
//!
//! For parallel processing, the library provides a `ThreadLocalRng` that can
//! be used without synchronization overhead. The island driver uses it to
//! derive an independent seed for each island task:
//!
//! ```rust
//! use archipelago::rng::ThreadLocalRng;
//!
//! let seed = ThreadLocalRng::gen_range(0..u64::MAX);
//! ```

use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

/// A thread-local random number generator that can be used without
/// synchronization.
///
/// This is useful for parallel processing where each thread needs its own
/// RNG. It uses the built-in `ThreadRng` from the `rand` crate, which is
/// automatically seeded from the system entropy and is thread-local.
pub struct ThreadLocalRng;

impl ThreadLocalRng {
    /// Generates a random number in the given range.
    pub fn gen_range<T, R>(range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        thread_rng().gen_range(range)
    }
}

/// A wrapper around the `rand` crate's `StdRng` that provides the integer
/// and coin-flip draws used by the genetic operators.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system
    /// entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniform integer from the inclusive range `[lo, hi]`.
    pub fn gen_inclusive(&mut self, lo: u64, hi: u64) -> u64 {
        debug_assert!(lo <= hi);
        self.rng.gen_range(lo..=hi)
    }

    /// Draws a uniform index in `[0, len)`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.gen_range(0..len)
    }

    /// Flips a coin that lands heads with probability `probability`.
    ///
    /// `probability` must be in `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Draws a uniform float in `[0, 1)`.
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
