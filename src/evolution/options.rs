//! # IslandOptions
//!
//! The `IslandOptions` struct is the validated configuration for one island
//! search run: restart cycle count, initial population size, genome bit
//! width, selection fraction, island parallelism, the generation cap that
//! backstops loop termination, and the seed range genomes are initialized
//! from. The crossover and mutation schemes are not part of the options;
//! they are the strategy objects handed to the launcher.
//!
//! ## Example
//!
//! ```rust
//! use archipelago::evolution::IslandOptions;
//!
//! let options = IslandOptions::builder()
//!     .cycles(20)
//!     .initial_population_size(225)
//!     .genome_width(15)
//!     .selection_fraction(0.05)
//!     .island_parallelism(10)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```

use crate::error::{GeneticError, Result};
use crate::genome::Genome;

const DEFAULT_CYCLES: usize = 20;
const DEFAULT_INITIAL_POPULATION_SIZE: usize = 128;
const DEFAULT_GENOME_WIDTH: usize = 16;
const DEFAULT_SELECTION_FRACTION: f64 = 0.05;
const DEFAULT_ISLAND_PARALLELISM: usize = 5;
const DEFAULT_MAX_GENERATIONS: usize = 64;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Configuration for an island search run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct IslandOptions {
    /// Number of independent restart cycles.
    cycles: usize,
    /// Population size each cycle starts from; also the size each island
    /// repopulates toward when breeding.
    initial_population_size: usize,
    /// Genome bit width; must equal the problem instance's item count.
    genome_width: usize,
    /// Fraction of the population that survives selection, in `(0, 1]`.
    selection_fraction: f64,
    /// Number of concurrent crossover+mutation islands per generation.
    island_parallelism: usize,
    /// Upper bound on generations within a cycle; reaching it collapses the
    /// population to its fittest genome.
    max_generations: usize,
    /// Inclusive code range genomes are initialized from. Defaults to the
    /// full `[0, 2^width - 1]` range.
    seed_range: Option<(u64, u64)>,
    /// Minimum population size before fitness evaluation goes parallel.
    parallel_threshold: usize,
}

impl IslandOptions {
    /// Creates options from the core search parameters, leaving the rest at
    /// their defaults.
    pub fn new(
        cycles: usize,
        initial_population_size: usize,
        genome_width: usize,
        selection_fraction: f64,
        island_parallelism: usize,
    ) -> Self {
        Self {
            cycles,
            initial_population_size,
            genome_width,
            selection_fraction,
            island_parallelism,
            max_generations: DEFAULT_MAX_GENERATIONS,
            seed_range: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Returns a builder for creating an `IslandOptions` instance.
    pub fn builder() -> IslandOptionsBuilder {
        IslandOptionsBuilder::default()
    }

    pub fn get_cycles(&self) -> usize {
        self.cycles
    }

    pub fn get_initial_population_size(&self) -> usize {
        self.initial_population_size
    }

    pub fn get_genome_width(&self) -> usize {
        self.genome_width
    }

    pub fn get_selection_fraction(&self) -> f64 {
        self.selection_fraction
    }

    pub fn get_island_parallelism(&self) -> usize {
        self.island_parallelism
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    /// The inclusive genome seed range, defaulting to `[0, 2^width - 1]`.
    pub fn seed_range(&self) -> (u64, u64) {
        self.seed_range
            .unwrap_or((0, Genome::mask(self.genome_width)))
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Validates the configuration.
    ///
    /// Called by the launcher before any evolution starts; every violation
    /// is a `GeneticError::Configuration` and aborts the run.
    pub fn validate(&self) -> Result<()> {
        if self.cycles == 0 {
            return Err(GeneticError::Configuration(
                "cycle count must be at least 1".to_string(),
            ));
        }
        if self.initial_population_size == 0 {
            return Err(GeneticError::Configuration(
                "initial population size must be at least 1".to_string(),
            ));
        }
        if self.genome_width == 0 || self.genome_width > Genome::MAX_WIDTH {
            return Err(GeneticError::Configuration(format!(
                "genome width must be in [1, {}], got {}",
                Genome::MAX_WIDTH,
                self.genome_width
            )));
        }
        if !self.selection_fraction.is_finite()
            || self.selection_fraction <= 0.0
            || self.selection_fraction > 1.0
        {
            return Err(GeneticError::Configuration(format!(
                "selection fraction must be in (0, 1], got {}",
                self.selection_fraction
            )));
        }
        if self.island_parallelism == 0 {
            return Err(GeneticError::Configuration(
                "island parallelism must be at least 1".to_string(),
            ));
        }
        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "generation cap must be at least 1".to_string(),
            ));
        }
        if let Some((lo, hi)) = self.seed_range {
            if lo > hi {
                return Err(GeneticError::Configuration(format!(
                    "seed range is inverted: [{}, {}]",
                    lo, hi
                )));
            }
            let mask = Genome::mask(self.genome_width);
            if hi > mask {
                return Err(GeneticError::Configuration(format!(
                    "seed range upper bound {} exceeds the {}-bit maximum {}",
                    hi, self.genome_width, mask
                )));
            }
        }
        Ok(())
    }
}

impl Default for IslandOptions {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            initial_population_size: DEFAULT_INITIAL_POPULATION_SIZE,
            genome_width: DEFAULT_GENOME_WIDTH,
            selection_fraction: DEFAULT_SELECTION_FRACTION,
            island_parallelism: DEFAULT_ISLAND_PARALLELISM,
            max_generations: DEFAULT_MAX_GENERATIONS,
            seed_range: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `IslandOptions`.
///
/// Provides a fluent interface for constructing `IslandOptions` instances;
/// unset fields fall back to their defaults.
#[derive(Debug, Clone, Default)]
pub struct IslandOptionsBuilder {
    cycles: Option<usize>,
    initial_population_size: Option<usize>,
    genome_width: Option<usize>,
    selection_fraction: Option<f64>,
    island_parallelism: Option<usize>,
    max_generations: Option<usize>,
    seed_range: Option<(u64, u64)>,
    parallel_threshold: Option<usize>,
}

impl IslandOptionsBuilder {
    pub fn cycles(mut self, value: usize) -> Self {
        self.cycles = Some(value);
        self
    }

    pub fn initial_population_size(mut self, value: usize) -> Self {
        self.initial_population_size = Some(value);
        self
    }

    pub fn genome_width(mut self, value: usize) -> Self {
        self.genome_width = Some(value);
        self
    }

    pub fn selection_fraction(mut self, value: f64) -> Self {
        self.selection_fraction = Some(value);
        self
    }

    pub fn island_parallelism(mut self, value: usize) -> Self {
        self.island_parallelism = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn seed_range(mut self, lo: u64, hi: u64) -> Self {
        self.seed_range = Some((lo, hi));
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `IslandOptions` instance. Validation happens separately,
    /// at the start of the search.
    pub fn build(self) -> IslandOptions {
        IslandOptions {
            cycles: self.cycles.unwrap_or(DEFAULT_CYCLES),
            initial_population_size: self
                .initial_population_size
                .unwrap_or(DEFAULT_INITIAL_POPULATION_SIZE),
            genome_width: self.genome_width.unwrap_or(DEFAULT_GENOME_WIDTH),
            selection_fraction: self
                .selection_fraction
                .unwrap_or(DEFAULT_SELECTION_FRACTION),
            island_parallelism: self
                .island_parallelism
                .unwrap_or(DEFAULT_ISLAND_PARALLELISM),
            max_generations: self.max_generations.unwrap_or(DEFAULT_MAX_GENERATIONS),
            seed_range: self.seed_range,
            parallel_threshold: self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}
