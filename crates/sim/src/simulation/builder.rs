//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! the reference parameters as defaults and full validation on `build()`.

use crate::base::FitnessLandscape;
use crate::errors::SimulationError;
use crate::simulation::{Configuration, DemographyConfig, Simulation};

/// Builder for constructing Simulation instances with a fluent API.
///
/// Unset parameters keep their reference values, except the population-size
/// schedule, which stays constant unless [`oscillate`](Self::oscillate) is
/// called.
///
/// # Examples
///
/// ```
/// use puncsim_sim::simulation::SimulationBuilder;
///
/// // Constant population
/// let mut sim = SimulationBuilder::new()
///     .population_size(50)
///     .generations(20)
///     .seed(42)
///     .build()
///     .unwrap();
/// sim.run().unwrap();
///
/// // Oscillating between 100 and 10 individuals
/// let sim = SimulationBuilder::new()
///     .population_size(50)
///     .generations(100)
///     .oscillate(100, 10, 20, 5)
///     .selection_strength(2.0)
///     .mutation_rate(0.05)
///     .mutation_strength(0.1)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    config: Configuration,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self {
            config: Configuration {
                demography: DemographyConfig::constant(),
                ..Configuration::default()
            },
        }
    }

    /// Start from an existing configuration.
    pub fn from_configuration(config: Configuration) -> Self {
        Self { config }
    }

    /// Set the starting population size.
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.execution.population_size = size;
        self
    }

    /// Set the number of generations to run.
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.execution.total_generations = generations;
        self
    }

    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.execution.seed = Some(seed);
        self
    }

    /// Set the selection exponent.
    pub fn selection_strength(mut self, strength: f64) -> Self {
        self.config.evolution.selection_strength = strength;
        self
    }

    /// Set the per-allele mutation probability.
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.evolution.mutation_rate = rate;
        self
    }

    /// Set the standard deviation of the mutation draw.
    pub fn mutation_strength(mut self, strength: f64) -> Self {
        self.config.evolution.mutation_strength = strength;
        self
    }

    /// Oscillate the population size between `big_size` for `big_generations`
    /// and `small_size` for `small_generations`, starting in the big phase.
    pub fn oscillate(
        mut self,
        big_size: usize,
        small_size: usize,
        big_generations: usize,
        small_generations: usize,
    ) -> Self {
        self.config.demography =
            DemographyConfig::oscillating(big_size, small_size, big_generations, small_generations);
        self
    }

    /// Keep the population at its starting size.
    pub fn constant_size(mut self) -> Self {
        self.config.demography.enabled = false;
        self
    }

    /// The configuration built so far.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Build the simulation on the default landscape.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Simulation, SimulationError> {
        Simulation::new(self.config)
    }

    /// Build the simulation on a custom landscape.
    pub fn build_with_landscape<L: FitnessLandscape>(
        self,
        landscape: L,
    ) -> Result<Simulation<L>, SimulationError> {
        Simulation::with_landscape(self.config, landscape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::SineLandscape;
    use crate::errors::ConfigurationError;
    use crate::simulation::{EvolutionConfig, ExecutionConfig, Phase};

    #[test]
    fn test_builder_defaults() {
        let builder = SimulationBuilder::new();
        let config = builder.configuration();
        assert!(!config.demography.enabled);
        assert_eq!(config.execution.population_size, 10_000);
        assert_eq!(config.evolution.mutation_rate, 0.01);
    }

    #[test]
    fn test_builder_sets_parameters() {
        let builder = SimulationBuilder::new()
            .population_size(12)
            .generations(7)
            .seed(5)
            .selection_strength(1.5)
            .mutation_rate(0.2)
            .mutation_strength(0.05);
        let config = builder.configuration();

        assert_eq!(config.execution.population_size, 12);
        assert_eq!(config.execution.total_generations, 7);
        assert_eq!(config.execution.seed, Some(5));
        assert_eq!(config.evolution.selection_strength, 1.5);
        assert_eq!(config.evolution.mutation_rate, 0.2);
        assert_eq!(config.evolution.mutation_strength, 0.05);
    }

    #[test]
    fn test_builder_from_configuration() {
        let config = Configuration {
            execution: ExecutionConfig::new(6, 3, Some(11)),
            evolution: EvolutionConfig::new(2.0, 0.4, 0.1),
            demography: DemographyConfig::oscillating(6, 2, 1, 1),
        };

        let builder = SimulationBuilder::from_configuration(config.clone());
        assert_eq!(builder.configuration(), &config);

        let builder = builder.generations(5);
        assert_eq!(builder.configuration().execution.total_generations, 5);
        assert_eq!(builder.configuration().demography, config.demography);

        let sim = builder.build().unwrap();
        assert_eq!(sim.population().size(), 6);
    }

    #[test]
    fn test_builder_oscillation_toggle() {
        let builder = SimulationBuilder::new().oscillate(100, 10, 3, 2);
        assert!(builder.configuration().demography.enabled);
        assert_eq!(builder.configuration().demography.small_generations, 2);

        let builder = builder.constant_size();
        assert!(!builder.configuration().demography.enabled);
    }

    #[test]
    fn test_build_validates() {
        let err = SimulationBuilder::new().population_size(0).build().unwrap_err();
        assert_eq!(
            err,
            SimulationError::Configuration(ConfigurationError::EmptyPopulation)
        );

        let err = SimulationBuilder::new()
            .oscillate(100, 10, 0, 2)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::Configuration(ConfigurationError::ZeroPhaseDuration {
                phase: Phase::Big
            })
        );
    }

    #[test]
    fn test_build_with_landscape() {
        let sim = SimulationBuilder::new()
            .population_size(3)
            .generations(1)
            .build_with_landscape(SineLandscape::new(2.0))
            .unwrap();
        assert_eq!(sim.landscape().frequency, 2.0);
    }
}
