pub mod elitist;

use std::fmt::Debug;

use crate::error::Result;
use crate::fitness::Fitness;
use crate::genome::Genome;

/// Trait for selection strategies.
///
/// Selection strategies choose which genomes survive a generation based on
/// their fitness scores. The driver computes how many to keep
/// (`max(1, ceil(fraction * population))`); the strategy decides which.
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` genomes from the population.
    ///
    /// `fitness` is index-aligned with `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or the fitness vector
    /// length doesn't match the population length.
    fn select(
        &self,
        population: &[Genome],
        fitness: &[Fitness],
        num_to_select: usize,
    ) -> Result<Vec<Genome>>;
}

pub use elitist::ElitistSelection;
