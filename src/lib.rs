pub mod error;
pub mod evolution;
pub mod fitness;
pub mod genome;
pub mod knapsack;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{Challenge, EvolutionResult, IslandLauncher, IslandOptions};
pub use fitness::Fitness;
pub use genome::Genome;
pub use knapsack::{Knapsack, KnapsackChallenge};
pub use selection::{ElitistSelection, SelectionStrategy};
pub use strategy::{
    BitFlipMutation, BreedStrategy, CrossoverStrategy, IslandBreeder, KPointCrossover,
    MutationStrategy, UniformCrossover,
};
