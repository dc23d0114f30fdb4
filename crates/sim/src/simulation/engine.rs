//! Simulation engine for the two-trait population.
//!
//! This module provides the main simulation loop that orchestrates the
//! size schedule, mutation, selection and per-generation recording.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::base::{FitnessLandscape, SineLandscape};
use crate::errors::SimulationError;
use crate::evolution::{resize_population, FitnessSelection, RegressionMutation};
use crate::simulation::{
    Configuration, Phase, Population, PopulationSummary, ResizeEvent, SizeSchedule, Trajectory,
};

/// Generations between two progress notifications.
pub const PROGRESS_INTERVAL: usize = 50;

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation<L = SineLandscape> {
    /// Current population
    population: Population,
    /// Index of the next generation to run
    generation: usize,
    /// Population-size schedule
    schedule: SizeSchedule,
    /// Mutation operator
    mutation: RegressionMutation,
    /// Selection operator
    selection: FitnessSelection,
    /// Fitness landscape
    landscape: L,
    /// Simulation configuration
    config: Configuration,
    /// Recorded per-generation statistics
    trajectory: Trajectory,
    /// Random number generator (Xoshiro256++)
    rng: Xoshiro256PlusPlus,
}

impl Simulation<SineLandscape> {
    /// Create a new simulation on the default sinusoidal landscape.
    ///
    /// # Errors
    /// Returns [`SimulationError::Configuration`] if `config` is invalid.
    /// No generation runs in that case.
    pub fn new(config: Configuration) -> Result<Self, SimulationError> {
        Self::with_landscape(config, SineLandscape::default())
    }
}

impl<L: FitnessLandscape> Simulation<L> {
    /// Create a new simulation on a custom fitness landscape.
    ///
    /// The population starts with every individual at `(0, 0)`. With size
    /// oscillation enabled it is taken at the big-phase size from the start;
    /// since all starting individuals are identical this is the same
    /// population a resample of the starting size would give.
    pub fn with_landscape(config: Configuration, landscape: L) -> Result<Self, SimulationError> {
        config.validate()?;
        let mutation = config.evolution.mutation()?;
        let selection = config.evolution.selection()?;

        // Create RNG from seed or thread_rng
        let rng = if let Some(seed) = config.execution.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        let schedule = SizeSchedule::new(&config);
        let population = Population::zeroed(schedule.target_size());
        let trajectory = Trajectory::with_capacity(config.execution.total_generations);

        tracing::debug!(
            starting_size = config.execution.population_size,
            working_size = population.size(),
            generations = config.execution.total_generations,
            seed = ?config.execution.seed,
            "simulation initialized"
        );

        Ok(Self {
            population,
            generation: 0,
            schedule,
            mutation,
            selection,
            landscape,
            config,
            trajectory,
            rng,
        })
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Index of the next generation to run (equals the number completed).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Get reference to simulation configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Get reference to the size schedule.
    pub fn schedule(&self) -> &SizeSchedule {
        &self.schedule
    }

    /// Current phase of an oscillating schedule.
    pub fn phase(&self) -> Option<Phase> {
        self.schedule.phase()
    }

    /// Get reference to the fitness landscape.
    pub fn landscape(&self) -> &L {
        &self.landscape
    }

    /// Statistics recorded so far.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Consume the simulation and return its recorded statistics.
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    /// Whether every configured generation has run.
    pub fn is_complete(&self) -> bool {
        self.generation >= self.config.execution.total_generations
    }

    /// Summary statistics of the current population.
    pub fn summary(&self) -> PopulationSummary {
        self.population.summary(&self.landscape)
    }

    /// Resize the population if the schedule enters a new phase this generation.
    fn apply_schedule(&mut self) -> Result<(), SimulationError> {
        let Some(transition) = self.schedule.advance() else {
            return Ok(());
        };

        let generation = self.generation;
        let from = self.population.size();
        self.population = resize_population(&self.population, transition.target_size, &mut self.rng)
            .map_err(|source| SimulationError::Resize { generation, source })?;

        self.trajectory.push_resize(ResizeEvent {
            generation,
            from,
            to: transition.target_size,
            phase: transition.to,
        });
        tracing::info!(
            generation,
            from,
            to = transition.target_size,
            phase = %transition.to,
            "population resized"
        );

        Ok(())
    }

    /// Advance simulation by one generation.
    ///
    /// Resize (if scheduled), mutate, select, then record the summary.
    pub fn step(&mut self) -> Result<PopulationSummary, SimulationError> {
        let generation = self.generation;

        // 1. Apply scheduled resize
        self.apply_schedule()?;

        // 2. Mutate toward the pre-mutation trait means
        self.population = self.mutation.mutate(&self.population, &mut self.rng);

        // 3. Fitness-weighted resampling
        self.population = self
            .selection
            .select(&self.population, &self.landscape, &mut self.rng)
            .map_err(|e| SimulationError::from_selection(e, generation))?;

        // 4. Record
        let summary = self.population.summary(&self.landscape);
        self.trajectory.push(summary, self.population.size());
        self.generation += 1;

        tracing::debug!(
            generation,
            size = self.population.size(),
            mean_fitness = summary.mean_fitness,
            mean_a = summary.mean_a,
            mean_b = summary.mean_b,
            "generation complete"
        );

        Ok(summary)
    }

    /// Run the remaining configured generations.
    pub fn run(&mut self) -> Result<&Trajectory, SimulationError> {
        self.run_with_progress(|_| {})
    }

    /// Run the remaining configured generations, calling `on_progress` with
    /// the generation index every [`PROGRESS_INTERVAL`] generations
    /// (starting at generation 0).
    pub fn run_with_progress<F>(&mut self, mut on_progress: F) -> Result<&Trajectory, SimulationError>
    where
        F: FnMut(usize),
    {
        let total = self.config.execution.total_generations;
        tracing::info!(
            from = self.generation,
            to = total,
            size = self.population.size(),
            "running simulation"
        );

        while !self.is_complete() {
            if self.generation % PROGRESS_INTERVAL == 0 {
                tracing::info!(generation = self.generation, "progress");
                on_progress(self.generation);
            }
            self.step()?;
        }

        tracing::info!(generations = self.trajectory.len(), "simulation finished");
        Ok(&self.trajectory)
    }

    /// Run a specific number of generations, ignoring the configured total.
    pub fn run_for(&mut self, generations: usize) -> Result<(), SimulationError> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }
}
