use clap::{Args, ValueEnum};
use puncsim_sim::simulation::{
    defaults, Configuration, DemographyConfig, EvolutionConfig, ExecutionConfig,
};

/// How the finished trajectory is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Progress lines followed by the trait-A and trait-B mean vectors
    Text,
    /// A single JSON document with the configuration and full trajectory
    Json,
}

#[derive(Args, Debug)]
pub struct SimulationArgs {
    /// Selection strength
    ///
    /// Exponent of the fitness-proportional acceptance. 0 gives neutral drift.
    #[arg(short = 's', long, default_value_t = defaults::SELECTION_STRENGTH)]
    pub selection_strength: f64,

    /// Starting population size
    #[arg(short = 'n', long, default_value_t = defaults::POPULATION_SIZE)]
    pub population_size: usize,

    /// Per-allele mutation probability
    #[arg(short = 'm', long, default_value_t = defaults::MUTATION_RATE)]
    pub mutation_rate: f64,

    /// Standard deviation of the mutation draw around the population mean
    #[arg(long, default_value_t = defaults::MUTATION_STRENGTH)]
    pub mutation_strength: f64,

    /// Number of generations
    #[arg(short = 'g', long, default_value_t = defaults::GENERATIONS)]
    pub generations: usize,

    /// Keep the population size constant instead of oscillating
    #[arg(long)]
    pub constant_size: bool,

    /// Population size during the big phase
    #[arg(long, default_value_t = defaults::BIG_POPULATION)]
    pub big_population: usize,

    /// Population size during the small phase
    #[arg(long, default_value_t = defaults::SMALL_POPULATION)]
    pub small_population: usize,

    /// Generations spent in the big phase
    #[arg(long, default_value_t = defaults::BIG_GENERATIONS)]
    pub big_generations: usize,

    /// Generations spent in the small phase
    #[arg(long, default_value_t = defaults::SMALL_GENERATIONS)]
    pub small_generations: usize,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SimulationArgs {
    /// Assemble the simulation configuration from the parsed flags.
    pub fn configuration(&self) -> Configuration {
        Configuration {
            execution: ExecutionConfig::new(self.population_size, self.generations, self.seed),
            evolution: EvolutionConfig::new(
                self.selection_strength,
                self.mutation_rate,
                self.mutation_strength,
            ),
            demography: DemographyConfig {
                enabled: defaults::CHANGE_POPULATION && !self.constant_size,
                big_size: self.big_population,
                small_size: self.small_population,
                big_generations: self.big_generations,
                small_generations: self.small_generations,
            },
        }
    }
}
