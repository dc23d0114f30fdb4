//! Fitness landscapes over the two-trait phenotype.
//!
//! A landscape maps the trait pair `(a, b)` of an individual to a scalar
//! fitness. Selection raises fitness to a real-valued power, so every
//! landscape must return a non-negative value; selection checks this and
//! reports a violation instead of sampling from a broken distribution.

use serde::{Deserialize, Serialize};

use crate::genome::Individual;

/// Trait for scoring the fitness of an individual from its two traits.
///
/// Implementors must return a non-negative value for every finite input.
pub trait FitnessLandscape {
    /// Fitness of the trait pair `(a, b)`.
    fn fitness(&self, a: f64, b: f64) -> f64;

    /// Fitness of an individual.
    #[inline]
    fn individual_fitness(&self, individual: &Individual) -> f64 {
        self.fitness(individual.a(), individual.b())
    }
}

/// Rugged sinusoidal landscape: `fitness(a, b) = sin(frequency·a·b) + 1`.
///
/// Ridges of maximal fitness (2.0) alternate with valleys of zero fitness
/// along hyperbolas `a·b = const`, so a population sitting on one ridge has
/// to cross a valley to reach the next. The default frequency is 7.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SineLandscape {
    /// Angular frequency of the product `a·b`.
    pub frequency: f64,
}

impl SineLandscape {
    /// Frequency of the reference landscape.
    pub const DEFAULT_FREQUENCY: f64 = 7.0;

    /// Create a landscape with a custom frequency.
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }
}

impl Default for SineLandscape {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FREQUENCY)
    }
}

impl FitnessLandscape for SineLandscape {
    #[inline]
    fn fitness(&self, a: f64, b: f64) -> f64 {
        (self.frequency * a * b).sin() + 1.0
    }
}

/// Fitness of `(a, b)` on the default landscape.
#[inline]
pub fn fitness(a: f64, b: f64) -> f64 {
    SineLandscape::default().fitness(a, b)
}

/// Returns `true` if `value` can be used as a selection weight.
#[inline]
pub(crate) fn is_valid_fitness(value: f64) -> bool {
    value >= 0.0 && value.is_finite()
}
