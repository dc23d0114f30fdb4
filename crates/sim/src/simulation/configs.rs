//! Simulation configuration.
//!
//! All parameters are fixed when the simulation starts. The population size
//! is the only quantity that changes during a run, and it lives in the
//! engine's state rather than here.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;
use crate::evolution::{FitnessSelection, RegressionMutation};
use crate::simulation::Phase;

/// Reference parameter values.
pub mod defaults {
    pub const SELECTION_STRENGTH: f64 = 0.5;
    pub const POPULATION_SIZE: usize = 10_000;
    pub const MUTATION_RATE: f64 = 0.01;
    pub const MUTATION_STRENGTH: f64 = 0.3;
    pub const GENERATIONS: usize = 1000;

    pub const CHANGE_POPULATION: bool = true;
    pub const BIG_POPULATION: usize = 1000;
    pub const SMALL_POPULATION: usize = 30;
    pub const BIG_GENERATIONS: usize = 1000;
    pub const SMALL_GENERATIONS: usize = 100;
}

/// The master configuration struct.
/// Can be serialized alongside a trajectory to reproduce a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub execution: ExecutionConfig,
    pub evolution: EvolutionConfig,
    pub demography: DemographyConfig,
}

impl Configuration {
    /// Check every parameter and parameter combination.
    ///
    /// # Errors
    /// Returns the first [`ConfigurationError`] found.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.execution.validate()?;
        self.evolution.validate()?;
        self.demography.validate()
    }
}

/// Run length, starting size and randomness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Number of individuals before any size phase is applied
    pub population_size: usize,
    /// Total number of generations to simulate
    pub total_generations: usize,
    /// Optional RNG seed for reproducibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ExecutionConfig {
    pub fn new(population_size: usize, total_generations: usize, seed: Option<u64>) -> Self {
        Self {
            population_size,
            total_generations,
            seed,
        }
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.population_size == 0 {
            return Err(ConfigurationError::EmptyPopulation);
        }
        Ok(())
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::new(defaults::POPULATION_SIZE, defaults::GENERATIONS, None)
    }
}

/// Mutation and selection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Exponent controlling how sharply selection discriminates
    pub selection_strength: f64,
    /// Per-allele mutation probability
    pub mutation_rate: f64,
    /// Standard deviation of the regression-to-mean draw
    pub mutation_strength: f64,
}

impl EvolutionConfig {
    pub fn new(selection_strength: f64, mutation_rate: f64, mutation_strength: f64) -> Self {
        Self {
            selection_strength,
            mutation_rate,
            mutation_strength,
        }
    }

    /// Build the mutation operator.
    pub fn mutation(&self) -> Result<RegressionMutation, ConfigurationError> {
        RegressionMutation::new(self.mutation_rate, self.mutation_strength)
    }

    /// Build the selection operator.
    pub fn selection(&self) -> Result<FitnessSelection, ConfigurationError> {
        FitnessSelection::new(self.selection_strength)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        self.mutation()?;
        self.selection()?;
        Ok(())
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self::new(
            defaults::SELECTION_STRENGTH,
            defaults::MUTATION_RATE,
            defaults::MUTATION_STRENGTH,
        )
    }
}

/// Periodic population-size oscillation between a big and a small phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographyConfig {
    /// Whether the population size oscillates at all
    pub enabled: bool,
    /// Population size during the big phase
    pub big_size: usize,
    /// Population size during the small phase
    pub small_size: usize,
    /// Generations spent in the big phase
    pub big_generations: usize,
    /// Generations spent in the small phase
    pub small_generations: usize,
}

impl DemographyConfig {
    /// Oscillating population sizes.
    pub fn oscillating(
        big_size: usize,
        small_size: usize,
        big_generations: usize,
        small_generations: usize,
    ) -> Self {
        Self {
            enabled: true,
            big_size,
            small_size,
            big_generations,
            small_generations,
        }
    }

    /// Constant population size; the phase fields keep the reference values
    /// but are never read.
    pub fn constant() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Target population size of `phase`.
    pub fn size_of(&self, phase: Phase) -> usize {
        match phase {
            Phase::Big => self.big_size,
            Phase::Small => self.small_size,
        }
    }

    /// Duration in generations of `phase`.
    pub fn duration_of(&self, phase: Phase) -> usize {
        match phase {
            Phase::Big => self.big_generations,
            Phase::Small => self.small_generations,
        }
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.enabled {
            return Ok(());
        }
        for phase in [Phase::Big, Phase::Small] {
            if self.size_of(phase) == 0 {
                return Err(ConfigurationError::EmptyPhase { phase });
            }
            if self.duration_of(phase) == 0 {
                return Err(ConfigurationError::ZeroPhaseDuration { phase });
            }
        }
        Ok(())
    }
}

impl Default for DemographyConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::CHANGE_POPULATION,
            big_size: defaults::BIG_POPULATION,
            small_size: defaults::SMALL_POPULATION,
            big_generations: defaults::BIG_GENERATIONS,
            small_generations: defaults::SMALL_GENERATIONS,
        }
    }
}
