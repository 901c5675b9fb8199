use crate::fitness::Fitness;
use crate::genome::Genome;

/// A fitness function over fixed-width genomes.
///
/// Implementations close over the problem data and must be deterministic and
/// side-effect-free: the engine recomputes scores on demand instead of
/// storing them on the genome.
pub trait Challenge {
    /// The bit width the challenge scores genomes at. The driver validates
    /// the configured genome width against this before a search starts.
    fn genome_width(&self) -> usize;

    /// Scores a genome. Infeasible selections are an ordinary outcome,
    /// reported as [`Fitness::Infeasible`], never an error.
    fn score(&self, genome: Genome) -> Fitness;
}
