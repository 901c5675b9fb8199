//! # Genetic Operators
//!
//! The crossover and mutation schemes, and the combinator that applies them
//! inside an island. All three are pluggable strategy seams: the driver is
//! generic over a [`BreedStrategy`], and the provided [`IslandBreeder`] is in
//! turn generic over a [`CrossoverStrategy`] and a [`MutationStrategy`].
//!
//! Every operator works on the decoded fixed-width bit vector and re-encodes
//! the result, so offspring can never leave the `[0, 2^width - 1]` range.

pub mod bit_flip;
pub mod breeder;
pub mod k_point;
pub mod uniform;

use std::fmt::Debug;

use crate::error::Result;
use crate::evolution::options::IslandOptions;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// Trait for crossover schemes.
///
/// A scheme recombines one parent pair into two children. Parents may be the
/// same genome (pairing happens with replacement), in which case both
/// children equal the parent.
pub trait CrossoverStrategy: Debug + Send + Sync {
    /// Recombines two parents at the given bit width.
    fn recombine(
        &self,
        first: Genome,
        second: Genome,
        width: usize,
        rng: &mut RandomNumberGenerator,
    ) -> (Genome, Genome);
}

/// Trait for mutation schemes.
pub trait MutationStrategy: Debug + Send + Sync {
    /// Mutates a single genome at the given bit width.
    fn mutate(&self, genome: Genome, width: usize, rng: &mut RandomNumberGenerator) -> Genome;
}

/// Trait for the crossover+mutation combinator an island runs.
///
/// The `breed` method produces a fresh offspring set from the survivor
/// population. Duplicates are kept; deduplication happens only when the
/// driver merges the island outputs.
pub trait BreedStrategy: Debug + Send + Sync {
    /// Breeds offspring from the survivor slice.
    ///
    /// # Errors
    ///
    /// Returns an error if `parents` is empty.
    fn breed(
        &self,
        parents: &[Genome],
        options: &IslandOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>>;
}

pub use bit_flip::BitFlipMutation;
pub use breeder::IslandBreeder;
pub use k_point::KPointCrossover;
pub use uniform::UniformCrossover;
