//! Error types for configuration, the evolutionary operators and the
//! simulation driver.

use thiserror::Error;

use crate::simulation::Phase;

/// An invalid parameter combination, or a fitness landscape that broke the
/// non-negativity contract selection relies on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The starting population must hold at least one individual.
    #[error("population size must be greater than 0")]
    EmptyPopulation,

    /// Per-allele mutation probability outside [0.0, 1.0].
    #[error("invalid mutation rate: {0} (must be between 0.0 and 1.0)")]
    InvalidMutationRate(f64),

    /// Mutation standard deviation must be strictly positive and finite.
    #[error("invalid mutation strength: {0} (must be greater than 0.0)")]
    InvalidMutationStrength(f64),

    /// Selection exponent must be non-negative and finite.
    #[error("invalid selection strength: {0} (must be at least 0.0)")]
    InvalidSelectionStrength(f64),

    /// A phase of the size oscillation targets an empty population.
    #[error("{phase} phase population size must be greater than 0")]
    EmptyPhase { phase: Phase },

    /// A phase of the size oscillation lasts zero generations.
    #[error("{phase} phase duration must be greater than 0 generations")]
    ZeroPhaseDuration { phase: Phase },

    /// Fitness evaluated to NaN or a negative number.
    #[error(
        "fitness of individual ({a}, {b}) is {value} at generation {generation} \
         (must be a non-negative number)"
    )]
    InvalidFitness {
        a: f64,
        b: f64,
        value: f64,
        generation: usize,
    },
}

/// Failures of a single selection pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// There is nobody to draw from.
    #[error("cannot select from an empty population")]
    EmptyPopulation,

    /// The resampling bound was hit before the output population filled up.
    #[error("selection starved: accepted {accepted} of {target} individuals after {attempts} draws")]
    Starvation {
        accepted: usize,
        target: usize,
        attempts: usize,
    },

    /// Fitness evaluated to NaN or a negative number.
    #[error("fitness of individual ({a}, {b}) is {value}")]
    InvalidFitness { a: f64, b: f64, value: f64 },
}

/// Failures of a population resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// Resampling needs at least one individual to copy from.
    #[error("cannot resample {target} individuals from an empty population")]
    EmptySource { target: usize },
}

/// Fatal errors raised while running a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Selection could not fill the next generation.
    #[error(
        "selection starved at generation {generation}: accepted {accepted} of {target} \
         individuals after {attempts} draws"
    )]
    SelectionStarvation {
        generation: usize,
        accepted: usize,
        target: usize,
        attempts: usize,
    },

    /// The population was empty when selection ran.
    #[error("population is empty at generation {generation}")]
    EmptyPopulation { generation: usize },

    /// A scheduled resize failed.
    #[error("resize failed at generation {generation}: {source}")]
    Resize {
        generation: usize,
        #[source]
        source: ResizeError,
    },
}

impl SimulationError {
    /// Attach the generation index to a selection failure.
    pub fn from_selection(error: SelectionError, generation: usize) -> Self {
        match error {
            SelectionError::EmptyPopulation => Self::EmptyPopulation { generation },
            SelectionError::Starvation {
                accepted,
                target,
                attempts,
            } => Self::SelectionStarvation {
                generation,
                accepted,
                target,
                attempts,
            },
            SelectionError::InvalidFitness { a, b, value } => {
                Self::Configuration(ConfigurationError::InvalidFitness {
                    a,
                    b,
                    value,
                    generation,
                })
            }
        }
    }

    /// Generation at which the failure happened, if it happened mid-run.
    pub fn generation(&self) -> Option<usize> {
        match self {
            Self::Configuration(ConfigurationError::InvalidFitness { generation, .. }) => {
                Some(*generation)
            }
            Self::Configuration(_) => None,
            Self::SelectionStarvation { generation, .. }
            | Self::EmptyPopulation { generation }
            | Self::Resize { generation, .. } => Some(*generation),
        }
    }
}
