//! # IslandLauncher
//!
//! The driver for the island search. A run is a sequence of independent
//! restart cycles; within a cycle the population repeatedly shrinks through
//! selection and regrows through several concurrent crossover+mutation
//! islands whose outputs are merged back into one deduplicated population.
//! Each cycle ends with a single winning genome, and the best winner across
//! cycles is the overall result.
//!
//! ## Example
//!
//! ```rust
//! use archipelago::evolution::{IslandLauncher, IslandOptions};
//! use archipelago::knapsack::{Knapsack, KnapsackChallenge};
//! use archipelago::rng::RandomNumberGenerator;
//! use archipelago::selection::ElitistSelection;
//! use archipelago::strategy::{BitFlipMutation, IslandBreeder, UniformCrossover};
//!
//! let instance = Knapsack::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5).unwrap();
//! let breeder = IslandBreeder::new(UniformCrossover::new(), BitFlipMutation::per_bit(4));
//! let launcher = IslandLauncher::new(
//!     breeder,
//!     ElitistSelection::new(),
//!     KnapsackChallenge::new(instance),
//! );
//!
//! let options = IslandOptions::builder()
//!     .cycles(10)
//!     .initial_population_size(16)
//!     .genome_width(4)
//!     .selection_fraction(0.5)
//!     .island_parallelism(4)
//!     .build();
//!
//! let mut rng = RandomNumberGenerator::new();
//! let result = launcher.run(&options, &mut rng).unwrap();
//! assert!(result.fitness.is_feasible());
//! ```

use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::{challenge::Challenge, options::IslandOptions};
use crate::{
    error::{GeneticError, OptionExt, Result},
    fitness::Fitness,
    genome::Genome,
    rng::{RandomNumberGenerator, ThreadLocalRng},
    selection::SelectionStrategy,
    strategy::BreedStrategy,
};

/// The result of a search: the winning genome and its fitness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvolutionResult {
    /// The winning genome.
    pub genome: Genome,
    /// The fitness of the winning genome.
    pub fitness: Fitness,
}

/// Runs the island search with pluggable breeding, selection, and fitness
/// strategies.
#[derive(Debug, Clone)]
pub struct IslandLauncher<B, S, F>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    F: Challenge,
{
    breeder: B,
    selection: S,
    challenge: F,
}

impl<B, S, F> IslandLauncher<B, S, F>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    F: Challenge + Send + Sync,
{
    /// Creates a new `IslandLauncher` from its three collaborators.
    pub fn new(breeder: B, selection: S, challenge: F) -> Self {
        Self {
            breeder,
            selection,
            challenge,
        }
    }

    /// Runs the full search: `cycles` independent restarts, one winner each,
    /// best winner overall.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation, or the genome width doesn't match the
    ///   challenge's item count
    /// - A generation's island fan-out fails twice in a row
    /// - An internal invariant is violated (e.g. no winner was recorded)
    pub fn run(
        &self,
        options: &IslandOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;
        if options.get_genome_width() != self.challenge.genome_width() {
            return Err(GeneticError::Configuration(format!(
                "genome width {} does not match the problem instance's {} items",
                options.get_genome_width(),
                self.challenge.genome_width()
            )));
        }

        let mut winners = Vec::with_capacity(options.get_cycles());
        for cycle in 0..options.get_cycles() {
            let winner = self.run_cycle(options, rng)?;
            debug!(
                cycle,
                genome = winner.genome.value(),
                fitness = %winner.fitness,
                "cycle finished"
            );
            winners.push(winner);
        }

        // Ties keep the earliest cycle's winner.
        winners
            .into_iter()
            .reduce(|best, candidate| {
                if candidate.fitness > best.fitness {
                    candidate
                } else {
                    best
                }
            })
            .ok_or_else_genetic(|| {
                GeneticError::Evolution(
                    "search finished without recording a cycle winner".to_string(),
                )
            })
    }

    /// One restart cycle: fresh population, evolve until a single genome
    /// remains or the population collapses through the degenerate guard.
    fn run_cycle(
        &self,
        options: &IslandOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        let (lo, hi) = options.seed_range();
        let mut population: Vec<Genome> = (0..options.get_initial_population_size())
            .map(|_| Genome::random(lo, hi, rng))
            .collect();

        let mut generation = 0;
        while population.len() > 1 {
            let fitness = self.score_population(&population, options);

            // Degenerate guard: selection could not keep more than one
            // genome, so the cycle ends on the fittest. The generation cap
            // backstops configurations (selection fraction of 1.0) where the
            // population never thins out.
            let fraction = options.get_selection_fraction();
            if fraction * population.len() as f64 <= 1.0
                || generation >= options.get_max_generations()
            {
                return self.collapse(&population, &fitness);
            }

            let num_survivors = ((fraction * population.len() as f64).ceil() as usize).max(1);
            let survivors = self.selection.select(&population, &fitness, num_survivors)?;

            population = self.breed_islands(&survivors, options)?;
            generation += 1;
            trace!(generation, size = population.len(), "merged island outputs");
        }

        let genome = population
            .first()
            .copied()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        Ok(EvolutionResult {
            genome,
            fitness: self.challenge.score(genome),
        })
    }

    /// Reduces a population to its single fittest genome. Ties keep the
    /// first genome in population order.
    fn collapse(&self, population: &[Genome], fitness: &[Fitness]) -> Result<EvolutionResult> {
        population
            .iter()
            .copied()
            .zip(fitness.iter().copied())
            .map(|(genome, fitness)| EvolutionResult { genome, fitness })
            .reduce(|best, candidate| {
                if candidate.fitness > best.fitness {
                    candidate
                } else {
                    best
                }
            })
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Scores the whole population, in parallel once it is large enough for
    /// the fan-out to pay off.
    fn score_population(&self, population: &[Genome], options: &IslandOptions) -> Vec<Fitness> {
        if population.len() >= options.get_parallel_threshold() {
            population
                .par_iter()
                .map(|&genome| self.challenge.score(genome))
                .collect()
        } else {
            population
                .iter()
                .map(|&genome| self.challenge.score(genome))
                .collect()
        }
    }

    /// One generation's island fan-out and merge.
    ///
    /// All islands read the same survivor slice; their outputs are combined
    /// only after every island has completed, together with the survivors
    /// themselves, into a deduplicated population in ascending genome order.
    /// A failed generation is retried once before surfacing the error.
    fn breed_islands(&self, survivors: &[Genome], options: &IslandOptions) -> Result<Vec<Genome>> {
        let outputs = match self.launch_islands(survivors, options) {
            Ok(outputs) => outputs,
            Err(err) => {
                warn!(error = %err, "island generation failed, retrying once");
                self.launch_islands(survivors, options)?
            }
        };

        let mut merged: BTreeSet<Genome> = survivors.iter().copied().collect();
        for island in outputs {
            merged.extend(island);
        }
        Ok(merged.into_iter().collect())
    }

    /// Fans out the configured number of island tasks and joins them all.
    ///
    /// Collecting into `Result` is the synchronization barrier: either every
    /// island's offspring set is present, or the whole generation fails.
    /// A partially merged generation would silently change the algorithm's
    /// statistical behavior. Each task owns an independently seeded RNG.
    fn launch_islands(
        &self,
        survivors: &[Genome],
        options: &IslandOptions,
    ) -> Result<Vec<Vec<Genome>>> {
        (0..options.get_island_parallelism())
            .into_par_iter()
            .map(|island| {
                let mut rng =
                    RandomNumberGenerator::from_seed(ThreadLocalRng::gen_range(0..u64::MAX));
                self.breeder
                    .breed(survivors, options, &mut rng)
                    .map_err(|e| GeneticError::Island(format!("island {} failed: {}", island, e)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::{Knapsack, KnapsackChallenge};
    use crate::selection::ElitistSelection;
    use crate::strategy::{BitFlipMutation, IslandBreeder, UniformCrossover};

    type TestLauncher = IslandLauncher<
        IslandBreeder<UniformCrossover, BitFlipMutation>,
        ElitistSelection,
        KnapsackChallenge,
    >;

    fn sample_launcher() -> TestLauncher {
        let instance = Knapsack::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5).unwrap();
        IslandLauncher::new(
            IslandBreeder::new(UniformCrossover::new(), BitFlipMutation::per_bit(4)),
            ElitistSelection::new(),
            KnapsackChallenge::new(instance),
        )
    }

    fn sample_options() -> IslandOptions {
        IslandOptions::builder()
            .cycles(5)
            .initial_population_size(16)
            .genome_width(4)
            .selection_fraction(0.5)
            .island_parallelism(4)
            .build()
    }

    #[test]
    fn test_width_mismatch_is_a_configuration_error() {
        let launcher = sample_launcher();
        let options = IslandOptions::builder()
            .genome_width(8)
            .initial_population_size(4)
            .build();

        let mut rng = RandomNumberGenerator::from_seed(71);
        let result = launcher.run(&options, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_invalid_options_surface_before_any_evolution() {
        let launcher = sample_launcher();
        let options = IslandOptions::builder()
            .genome_width(4)
            .selection_fraction(0.0)
            .build();

        let mut rng = RandomNumberGenerator::from_seed(73);
        assert!(launcher.run(&options, &mut rng).is_err());
    }

    #[test]
    fn test_degenerate_population_collapses_immediately() {
        // A one-genome population with fraction 1.0 never enters the
        // evolving loop; the single seeded genome is the cycle winner.
        let launcher = sample_launcher();
        let options = IslandOptions::builder()
            .cycles(3)
            .initial_population_size(1)
            .genome_width(4)
            .selection_fraction(1.0)
            .island_parallelism(2)
            .seed_range(12, 12)
            .build();

        let mut rng = RandomNumberGenerator::from_seed(79);
        let result = launcher.run(&options, &mut rng).unwrap();
        assert_eq!(result.genome, Genome::new(12));
        assert_eq!(result.fitness, Fitness::Value(7));
    }

    #[test]
    fn test_merge_deduplicates_and_sorts_ascending() {
        let launcher = sample_launcher();
        let survivors = vec![Genome::new(12), Genome::new(3), Genome::new(9)];

        let merged = launcher.breed_islands(&survivors, &sample_options()).unwrap();

        let mut seen = std::collections::HashSet::new();
        assert!(merged.iter().all(|&g| seen.insert(g)));
        assert!(merged.windows(2).all(|pair| pair[0] < pair[1]));
        // Survivors take part in the merge, so the generation's best genome
        // can never be lost.
        for survivor in survivors {
            assert!(merged.contains(&survivor));
        }
    }

    #[test]
    fn test_collapse_keeps_the_fittest() {
        let launcher = sample_launcher();
        let population = vec![Genome::new(15), Genome::new(12), Genome::new(1)];
        let fitness: Vec<Fitness> = population
            .iter()
            .map(|&g| launcher.challenge.score(g))
            .collect();

        let best = launcher.collapse(&population, &fitness).unwrap();
        assert_eq!(best.genome, Genome::new(12));
        assert_eq!(best.fitness, Fitness::Value(7));
    }
}
