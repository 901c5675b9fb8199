use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::strategy::MutationStrategy;

/// Bit-flip mutation: each bit of the fixed-width representation flips
/// independently with a small probability.
///
/// The flip works on the decoded bit vector and re-encodes, so the result is
/// always within `[0, 2^width - 1]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct BitFlipMutation {
    rate: f64,
}

impl BitFlipMutation {
    /// Creates a bit-flip mutation with the given per-bit flip probability.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` when `rate` is not in `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(GeneticError::Configuration(format!(
                "mutation rate must be in [0, 1], got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    /// The customary `1/width` rate: one expected flip per genome.
    pub fn per_bit(width: usize) -> Self {
        Self {
            rate: 1.0 / width.max(1) as f64,
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl MutationStrategy for BitFlipMutation {
    fn mutate(&self, genome: Genome, width: usize, rng: &mut RandomNumberGenerator) -> Genome {
        let mut bits = genome.bits(width);
        for bit in &mut bits {
            if rng.gen_bool(self.rate) {
                *bit ^= 1;
            }
        }
        Genome::from_bits(&bits)
    }
}
