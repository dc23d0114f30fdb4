//! Base building blocks: the fitness landscape individuals are scored on.

pub mod fitness;

pub use fitness::{FitnessLandscape, SineLandscape};
