pub mod challenge;
pub mod launcher;
pub mod options;

pub use challenge::Challenge;
pub use launcher::{EvolutionResult, IslandLauncher};
pub use options::{IslandOptions, IslandOptionsBuilder};
