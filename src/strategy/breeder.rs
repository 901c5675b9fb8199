use crate::error::{GeneticError, Result};
use crate::evolution::options::IslandOptions;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::strategy::{BreedStrategy, CrossoverStrategy, MutationStrategy};

/// The crossover+mutation combinator each island executes.
///
/// Parents are drawn from the survivor slice uniformly with replacement;
/// every recombined child is mutated and collected until the offspring set
/// reaches the configured initial population size, repopulating toward the
/// pre-selection size. Duplicates are kept; the driver deduplicates at the
/// merge boundary, not here.
#[derive(Debug, Clone)]
pub struct IslandBreeder<C, M>
where
    C: CrossoverStrategy,
    M: MutationStrategy,
{
    crossover: C,
    mutation: M,
}

impl<C, M> IslandBreeder<C, M>
where
    C: CrossoverStrategy,
    M: MutationStrategy,
{
    pub fn new(crossover: C, mutation: M) -> Self {
        Self {
            crossover,
            mutation,
        }
    }
}

impl<C, M> BreedStrategy for IslandBreeder<C, M>
where
    C: CrossoverStrategy,
    M: MutationStrategy,
{
    fn breed(
        &self,
        parents: &[Genome],
        options: &IslandOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>> {
        if parents.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let width = options.get_genome_width();
        let target = options.get_initial_population_size();
        let mut offspring = Vec::with_capacity(target);

        while offspring.len() < target {
            let first = parents[rng.gen_index(parents.len())];
            let second = parents[rng.gen_index(parents.len())];
            let (child, sibling) = self.crossover.recombine(first, second, width, rng);

            offspring.push(self.mutation.mutate(child, width, rng));
            if offspring.len() < target {
                offspring.push(self.mutation.mutate(sibling, width, rng));
            }
        }

        Ok(offspring)
    }
}
