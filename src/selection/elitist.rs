use crate::error::{GeneticError, Result};
use crate::fitness::Fitness;
use crate::genome::Genome;
use crate::selection::SelectionStrategy;

/// A selection strategy that keeps the fittest genomes.
///
/// Genomes are ranked descending by fitness and the top N survive. The sort
/// is stable, so genomes with equal fitness keep their original population
/// order and selection stays deterministic for a fixed input.
///
/// # Examples
///
/// ```
/// use archipelago::fitness::Fitness;
/// use archipelago::genome::Genome;
/// use archipelago::selection::{ElitistSelection, SelectionStrategy};
///
/// let population = vec![Genome::new(1), Genome::new(2), Genome::new(3)];
/// let fitness = vec![Fitness::Value(5), Fitness::Infeasible, Fitness::Value(8)];
///
/// let selected = ElitistSelection::default()
///     .select(&population, &fitness, 2)
///     .unwrap();
///
/// assert_eq!(selected, vec![Genome::new(3), Genome::new(1)]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select(
        &self,
        population: &[Genome],
        fitness: &[Fitness],
        num_to_select: usize,
    ) -> Result<Vec<Genome>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if fitness.len() != population.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        let mut indexed: Vec<(usize, Fitness)> = fitness.iter().copied().enumerate().collect();
        // Stable sort: ties keep their original population order.
        indexed.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(indexed
            .iter()
            .take(num_to_select)
            .map(|&(idx, _)| population[idx])
            .collect())
    }
}
