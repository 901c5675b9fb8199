use std::collections::BTreeSet;

use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::strategy::CrossoverStrategy;

/// k-point crossover: the parents' bit strings are cut at `k` random
/// positions and the segments spliced alternately.
///
/// The two children are the two alternating splices. When the genome is too
/// narrow to place all `k` cuts, as many distinct cuts as fit are used; a
/// one-bit genome has no interior cut positions and the parents pass through
/// unchanged.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct KPointCrossover {
    points: usize,
}

impl KPointCrossover {
    /// Creates a k-point crossover with `points` cut positions.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` when `points` is zero.
    pub fn new(points: usize) -> Result<Self> {
        if points == 0 {
            return Err(GeneticError::Configuration(
                "k-point crossover needs at least one cut point".to_string(),
            ));
        }
        Ok(Self { points })
    }

    /// Single-point crossover.
    pub fn single() -> Self {
        Self { points: 1 }
    }

    pub fn points(&self) -> usize {
        self.points
    }
}

impl CrossoverStrategy for KPointCrossover {
    fn recombine(
        &self,
        first: Genome,
        second: Genome,
        width: usize,
        rng: &mut RandomNumberGenerator,
    ) -> (Genome, Genome) {
        if width <= 1 {
            return (first, second);
        }

        // Interior cut positions are 1..width; draw until we have as many
        // distinct cuts as the width allows.
        let num_cuts = self.points.min(width - 1);
        let mut cuts = BTreeSet::new();
        while cuts.len() < num_cuts {
            cuts.insert(1 + rng.gen_index(width - 1));
        }

        let a = first.bits(width);
        let b = second.bits(width);

        let mut child = Vec::with_capacity(width);
        let mut sibling = Vec::with_capacity(width);
        let mut from_first = true;
        let mut start = 0;
        for end in cuts.into_iter().chain(std::iter::once(width)) {
            let (lead, trail) = if from_first { (&a, &b) } else { (&b, &a) };
            child.extend_from_slice(&lead[start..end]);
            sibling.extend_from_slice(&trail[start..end]);
            from_first = !from_first;
            start = end;
        }

        (Genome::from_bits(&child), Genome::from_bits(&sibling))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_points() {
        assert!(KPointCrossover::new(0).is_err());
        assert_eq!(KPointCrossover::new(2).unwrap().points(), 2);
    }

    #[test]
    fn test_single_point_splices_prefix_and_suffix() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        let width = 8;
        let first = Genome::new(0b11111111);
        let second = Genome::new(0b00000000);

        for _ in 0..20 {
            let (child, sibling) =
                KPointCrossover::single().recombine(first, second, width, &mut rng);
            let c = child.bits(width);
            let s = sibling.bits(width);

            // One cut: child is all-ones then all-zeros, sibling the reverse.
            let cut = c.iter().position(|&bit| bit == 0).unwrap_or(width);
            assert!(cut >= 1 && cut < width);
            assert!(c[..cut].iter().all(|&bit| bit == 1));
            assert!(c[cut..].iter().all(|&bit| bit == 0));
            assert!(s[..cut].iter().all(|&bit| bit == 0));
            assert!(s[cut..].iter().all(|&bit| bit == 1));
        }
    }

    #[test]
    fn test_children_bits_come_from_the_parents() {
        let mut rng = RandomNumberGenerator::from_seed(23);
        let width = 12;
        let crossover = KPointCrossover::new(3).unwrap();

        for _ in 0..20 {
            let first = Genome::random(0, Genome::mask(width), &mut rng);
            let second = Genome::random(0, Genome::mask(width), &mut rng);
            let (child, sibling) = crossover.recombine(first, second, width, &mut rng);

            let a = first.bits(width);
            let b = second.bits(width);
            let c = child.bits(width);
            let s = sibling.bits(width);
            for i in 0..width {
                assert!(c[i] == a[i] || c[i] == b[i]);
                assert_eq!(c[i] + s[i], a[i] + b[i]);
            }
        }
    }

    #[test]
    fn test_more_points_than_width_still_works() {
        let mut rng = RandomNumberGenerator::from_seed(29);
        let crossover = KPointCrossover::new(10).unwrap();
        let (child, sibling) =
            crossover.recombine(Genome::new(0b101), Genome::new(0b010), 3, &mut rng);
        assert!(child.value() <= Genome::mask(3));
        assert!(sibling.value() <= Genome::mask(3));
    }

    #[test]
    fn test_one_bit_genomes_pass_through() {
        let mut rng = RandomNumberGenerator::from_seed(31);
        let (child, sibling) =
            KPointCrossover::single().recombine(Genome::new(1), Genome::new(0), 1, &mut rng);
        assert_eq!(child, Genome::new(1));
        assert_eq!(sibling, Genome::new(0));
    }
}
