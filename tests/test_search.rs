use archipelago::{
    error::GeneticError,
    evolution::{Challenge, IslandLauncher, IslandOptions},
    fitness::Fitness,
    genome::Genome,
    knapsack::{Knapsack, KnapsackChallenge},
    rng::RandomNumberGenerator,
    selection::ElitistSelection,
    strategy::{BitFlipMutation, IslandBreeder, KPointCrossover, UniformCrossover},
};

fn sample_instance() -> Knapsack {
    Knapsack::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5).unwrap()
}

fn sample_options() -> IslandOptions {
    IslandOptions::builder()
        .cycles(25)
        .initial_population_size(16)
        .genome_width(4)
        .selection_fraction(0.5)
        .island_parallelism(4)
        .build()
}

#[test]
fn test_search_finds_the_optimal_selection() {
    let instance = sample_instance();
    let launcher = IslandLauncher::new(
        IslandBreeder::new(UniformCrossover::new(), BitFlipMutation::per_bit(4)),
        ElitistSelection::new(),
        KnapsackChallenge::new(instance.clone()),
    );

    let mut rng = RandomNumberGenerator::new();
    let result = launcher.run(&sample_options(), &mut rng).unwrap();

    // Items 0 and 1 are the optimum: weight 5, value 7.
    assert_eq!(result.fitness, Fitness::Value(7));
    assert_eq!(result.genome.bits(4), vec![1, 1, 0, 0]);

    let (weight, value) = instance.load(&result.genome.bits(4));
    assert!(weight <= instance.capacity());
    assert_eq!(value, 7);
}

#[test]
fn test_search_with_k_point_crossover() {
    let launcher = IslandLauncher::new(
        IslandBreeder::new(KPointCrossover::single(), BitFlipMutation::per_bit(4)),
        ElitistSelection::new(),
        KnapsackChallenge::new(sample_instance()),
    );

    let mut rng = RandomNumberGenerator::new();
    let result = launcher.run(&sample_options(), &mut rng).unwrap();

    assert_eq!(result.fitness, Fitness::Value(7));
}

#[test]
fn test_degenerate_configuration_collapses_to_the_seeded_genome() {
    // A single-genome population with selection fraction 1.0 must become the
    // cycle winner without any crossover or mutation happening.
    let launcher = IslandLauncher::new(
        IslandBreeder::new(UniformCrossover::new(), BitFlipMutation::per_bit(4)),
        ElitistSelection::new(),
        KnapsackChallenge::new(sample_instance()),
    );

    let options = IslandOptions::builder()
        .cycles(4)
        .initial_population_size(1)
        .genome_width(4)
        .selection_fraction(1.0)
        .island_parallelism(3)
        .seed_range(9, 9)
        .build();

    let mut rng = RandomNumberGenerator::new();
    let result = launcher.run(&options, &mut rng).unwrap();

    assert_eq!(result.genome, Genome::new(9));
}

#[test]
fn test_full_selection_fraction_still_terminates() {
    // With fraction 1.0 selection never thins the population; the generation
    // cap has to end each cycle.
    let launcher = IslandLauncher::new(
        IslandBreeder::new(UniformCrossover::new(), BitFlipMutation::per_bit(4)),
        ElitistSelection::new(),
        KnapsackChallenge::new(sample_instance()),
    );

    let options = IslandOptions::builder()
        .cycles(2)
        .initial_population_size(8)
        .genome_width(4)
        .selection_fraction(1.0)
        .island_parallelism(2)
        .max_generations(16)
        .build();

    let mut rng = RandomNumberGenerator::new();
    let result = launcher.run(&options, &mut rng).unwrap();

    assert_eq!(result.fitness, Fitness::Value(7));
}

#[test]
fn test_search_over_a_generated_instance() {
    let mut rng = RandomNumberGenerator::from_seed(12345);
    let instance = Knapsack::generate(10, 51, &mut rng).unwrap();
    let challenge = KnapsackChallenge::new(instance.clone());

    let launcher = IslandLauncher::new(
        IslandBreeder::new(UniformCrossover::new(), BitFlipMutation::per_bit(10)),
        ElitistSelection::new(),
        challenge.clone(),
    );

    let options = IslandOptions::builder()
        .cycles(10)
        .initial_population_size(100)
        .genome_width(10)
        .selection_fraction(0.1)
        .island_parallelism(5)
        .build();

    let result = launcher.run(&options, &mut rng).unwrap();

    // The winner must be a feasible selection, and its reported fitness must
    // agree with a recomputation from the decoded selection.
    assert!(result.fitness.is_feasible());
    let bits = result.genome.bits(10);
    let (weight, value) = instance.load(&bits);
    assert!(weight <= instance.capacity());
    assert_eq!(result.fitness, Fitness::Value(value));
    assert_eq!(challenge.score(result.genome), result.fitness);
}

#[test]
fn test_width_mismatch_aborts_the_search() {
    let launcher = IslandLauncher::new(
        IslandBreeder::new(UniformCrossover::new(), BitFlipMutation::per_bit(4)),
        ElitistSelection::new(),
        KnapsackChallenge::new(sample_instance()),
    );

    let options = IslandOptions::builder()
        .cycles(2)
        .initial_population_size(8)
        .genome_width(5)
        .build();

    let mut rng = RandomNumberGenerator::new();
    let result = launcher.run(&options, &mut rng);

    assert!(matches!(result, Err(GeneticError::Configuration(_))));
}
