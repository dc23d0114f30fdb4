//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use puncsim_sim::prelude::*;
//!
//! let pop = Population::zeroed(4);
//! assert_eq!(pop.summary(&SineLandscape::default()).mean_fitness, 1.0);
//! ```

pub use crate::base::fitness::{self, FitnessLandscape, SineLandscape};
pub use crate::errors::{ConfigurationError, ResizeError, SelectionError, SimulationError};
pub use crate::evolution::{resize_population, FitnessSelection, RegressionMutation};
pub use crate::genome::{Individual, Locus};
pub use crate::simulation::{
    Configuration, DemographyConfig, EvolutionConfig, ExecutionConfig, Phase, Population,
    PopulationSummary, Simulation, SimulationBuilder, Trajectory,
};
