use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::strategy::CrossoverStrategy;

/// Uniform crossover: each bit position is inherited from one of the two
/// parents with equal probability.
///
/// The two children are complementary: wherever one child takes the first
/// parent's bit, its sibling takes the second parent's.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl UniformCrossover {
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverStrategy for UniformCrossover {
    fn recombine(
        &self,
        first: Genome,
        second: Genome,
        width: usize,
        rng: &mut RandomNumberGenerator,
    ) -> (Genome, Genome) {
        let a = first.bits(width);
        let b = second.bits(width);

        let mut child = Vec::with_capacity(width);
        let mut sibling = Vec::with_capacity(width);
        for i in 0..width {
            if rng.gen_bool(0.5) {
                child.push(a[i]);
                sibling.push(b[i]);
            } else {
                child.push(b[i]);
                sibling.push(a[i]);
            }
        }

        (Genome::from_bits(&child), Genome::from_bits(&sibling))
    }
}
