//! Simulation engine and population management.
//!
//! The most commonly used simulation types are re-exported here:
//!
//! - `Simulation`: the engine that runs generations and orchestrates
//!   resizing, mutation and selection.
//! - `Population`: in-memory container for individuals.
//! - `SimulationBuilder`: fluent builder with defaults and validation.
//! - `Trajectory`: the per-generation record a run produces.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod population;
pub mod schedule;
pub mod trajectory;

pub use builder::SimulationBuilder;
pub use configs::{defaults, Configuration, DemographyConfig, EvolutionConfig, ExecutionConfig};
pub use engine::{Simulation, PROGRESS_INTERVAL};
pub use population::{Population, PopulationSummary};
pub use schedule::{Phase, PhaseTransition, SizeSchedule};
pub use trajectory::{ResizeEvent, Trajectory};
