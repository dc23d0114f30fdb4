//! # Simulation Crate
//!
//! The `sim` crate provides the core of a two-trait evolution simulator used
//! to explore punctuated-equilibrium-like dynamics: long stasis in the trait
//! means broken by rapid shifts. It includes modules for the fitness
//! landscape, individuals, the evolutionary operators (mutation, selection,
//! resize) and the generation-stepping engine.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::{FitnessLandscape, SineLandscape};
pub use genome::Individual;
pub use simulation::{Configuration, Population, Simulation, SimulationBuilder, Trajectory};
