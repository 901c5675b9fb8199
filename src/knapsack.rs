//! # Knapsack Problem Instance
//!
//! A knapsack instance is the tuple consumed by the search engine: `n` items,
//! index-aligned positive weight and value vectors, and a positive capacity.
//! Instances are validated at construction and never mutated during a search.
//!
//! [`KnapsackChallenge`] wraps an instance as a [`Challenge`], scoring a
//! genome with the total value of its selection when the total weight fits,
//! and [`Fitness::Infeasible`] otherwise.
//!
//! With the `serde` feature the instance (de)serializes with the plain
//! `{n, weights, values, capacity}` field schema, so generated instances can
//! be persisted as JSON and loaded back by external tooling.
//!
//! ## Example
//!
//! ```rust
//! use archipelago::evolution::Challenge;
//! use archipelago::fitness::Fitness;
//! use archipelago::genome::Genome;
//! use archipelago::knapsack::{Knapsack, KnapsackChallenge};
//!
//! let instance = Knapsack::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5).unwrap();
//! let challenge = KnapsackChallenge::new(instance);
//!
//! // Items 0 and 1: weight 5, value 7.
//! assert_eq!(challenge.score(Genome::from_bits(&[1, 1, 0, 0])), Fitness::Value(7));
//! // Everything at once does not fit.
//! assert_eq!(challenge.score(Genome::from_bits(&[1, 1, 1, 1])), Fitness::Infeasible);
//! ```

use crate::error::{GeneticError, Result};
use crate::evolution::Challenge;
use crate::fitness::Fitness;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// An immutable 0/1 knapsack problem instance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    n: usize,
    weights: Vec<u64>,
    values: Vec<u64>,
    capacity: u64,
}

impl Knapsack {
    /// Builds a validated instance from index-aligned weight and value
    /// vectors.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` when the vectors are empty,
    /// their lengths differ, any weight or value is zero, the capacity is
    /// zero, or there are more items than a genome can carry
    /// ([`Genome::MAX_WIDTH`]).
    pub fn new(weights: Vec<u64>, values: Vec<u64>, capacity: u64) -> Result<Self> {
        let n = weights.len();
        if n == 0 {
            return Err(GeneticError::Configuration(
                "knapsack instance must contain at least one item".to_string(),
            ));
        }
        if n > Genome::MAX_WIDTH {
            return Err(GeneticError::Configuration(format!(
                "{} items exceed the maximum genome width of {}",
                n,
                Genome::MAX_WIDTH
            )));
        }
        if values.len() != n {
            return Err(GeneticError::Configuration(format!(
                "weights ({}) and values ({}) must be index-aligned",
                n,
                values.len()
            )));
        }
        if weights.iter().any(|&w| w == 0) {
            return Err(GeneticError::Configuration(
                "item weights must be positive".to_string(),
            ));
        }
        if values.iter().any(|&v| v == 0) {
            return Err(GeneticError::Configuration(
                "item values must be positive".to_string(),
            ));
        }
        if capacity == 0 {
            return Err(GeneticError::Configuration(
                "capacity must be positive".to_string(),
            ));
        }
        Ok(Self {
            n,
            weights,
            values,
            capacity,
        })
    }

    /// Generates a random instance in the shape the original data tooling
    /// produced.
    ///
    /// Values are a cumulative sum of uniform draws from `[1, upper_seed)`,
    /// weights a rounded cumulative sum of `value * U(0, 1)`, after which
    /// every value is bumped by its weight so values dominate weights. The
    /// capacity is three times a weight drawn from the heaviest ten percent
    /// of items, which leaves room for a non-trivial subset.
    pub fn generate(n: usize, upper_seed: u64, rng: &mut RandomNumberGenerator) -> Result<Self> {
        if n == 0 || n > Genome::MAX_WIDTH {
            return Err(GeneticError::Configuration(format!(
                "item count must be in [1, {}], got {}",
                Genome::MAX_WIDTH,
                n
            )));
        }
        if upper_seed < 2 {
            return Err(GeneticError::Configuration(
                "upper_seed must be at least 2 to draw positive values".to_string(),
            ));
        }

        let mut values = Vec::with_capacity(n);
        let mut value_acc = 0u64;
        for _ in 0..n {
            value_acc += rng.gen_inclusive(1, upper_seed - 1);
            values.push(value_acc);
        }

        // Rounding the running sum can truncate the first weights to zero;
        // clamp to keep every weight positive.
        let mut weights = Vec::with_capacity(n);
        let mut weight_acc = 0f64;
        for &value in &values {
            weight_acc += value as f64 * rng.gen_f64();
            weights.push((weight_acc as u64).max(1));
        }

        for (value, &weight) in values.iter_mut().zip(&weights) {
            *value += weight;
        }

        // The weights are non-decreasing, so the heaviest decile is the tail.
        let decile = ((n as f64 * 0.1).ceil() as usize).max(1);
        let pick = n - decile + rng.gen_index(decile);
        let capacity = 3 * weights[pick];

        Self::new(weights, values, capacity)
    }

    /// Number of items.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Item weights, index-aligned with [`Knapsack::values`].
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Item values, index-aligned with [`Knapsack::weights`].
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// The weight the knapsack can carry.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Sums the selected items' weight and value for an n-bit selection.
    pub fn load(&self, bits: &[u8]) -> (u64, u64) {
        debug_assert_eq!(bits.len(), self.n);
        bits.iter()
            .zip(self.weights.iter().zip(&self.values))
            .filter(|(&bit, _)| bit == 1)
            .fold((0, 0), |(weight, value), (_, (&w, &v))| {
                (weight + w, value + v)
            })
    }
}

/// A [`Challenge`] closed over a knapsack instance.
#[derive(Debug, Clone)]
pub struct KnapsackChallenge {
    instance: Knapsack,
}

impl KnapsackChallenge {
    pub fn new(instance: Knapsack) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &Knapsack {
        &self.instance
    }
}

impl Challenge for KnapsackChallenge {
    fn genome_width(&self) -> usize {
        self.instance.n
    }

    fn score(&self, genome: Genome) -> Fitness {
        let bits = genome.bits(self.instance.n);
        let (weight, value) = self.instance.load(&bits);
        if weight <= self.instance.capacity {
            Fitness::Value(value)
        } else {
            Fitness::Infeasible
        }
    }
}
