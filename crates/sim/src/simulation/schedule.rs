//! Population-size schedule.
//!
//! Without oscillation the population keeps its starting size for the whole
//! run. With oscillation the schedule starts in the big phase and counts the
//! generations spent in the current phase. At the start of a generation in
//! which the count has reached the phase duration, the phase flips, the
//! count restarts and the engine resizes before mutating.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::simulation::{Configuration, DemographyConfig};

/// Population-size regime of an oscillating schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Big,
    Small,
}

impl Phase {
    /// The phase that follows this one.
    pub fn next(self) -> Self {
        match self {
            Phase::Big => Phase::Small,
            Phase::Small => Phase::Big,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Big => write!(f, "big"),
            Phase::Small => write!(f, "small"),
        }
    }
}

/// A phase flip reported by [`SizeSchedule::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTransition {
    pub from: Phase,
    pub to: Phase,
    /// Population size the new phase targets
    pub target_size: usize,
}

/// State of the population-size schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SizeSchedule {
    /// The population never changes size.
    Constant { size: usize },
    /// The population alternates between the big and small phase sizes.
    Oscillating {
        phase: Phase,
        generations_in_phase: usize,
        demography: DemographyConfig,
    },
}

impl SizeSchedule {
    /// Initial schedule for `config`: constant at the starting size, or the
    /// big phase with no generations elapsed.
    pub fn new(config: &Configuration) -> Self {
        if config.demography.enabled {
            Self::Oscillating {
                phase: Phase::Big,
                generations_in_phase: 0,
                demography: config.demography.clone(),
            }
        } else {
            Self::Constant {
                size: config.execution.population_size,
            }
        }
    }

    /// Population size the current phase targets.
    pub fn target_size(&self) -> usize {
        match self {
            Self::Constant { size } => *size,
            Self::Oscillating {
                phase, demography, ..
            } => demography.size_of(*phase),
        }
    }

    /// Current phase, or `None` for a constant schedule.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Constant { .. } => None,
            Self::Oscillating { phase, .. } => Some(*phase),
        }
    }

    /// Generations already spent in the current phase.
    pub fn generations_in_phase(&self) -> usize {
        match self {
            Self::Constant { .. } => 0,
            Self::Oscillating {
                generations_in_phase,
                ..
            } => *generations_in_phase,
        }
    }

    /// Enter the next generation.
    ///
    /// Returns the transition if the current phase has run its full duration,
    /// in which case the population must be resized to the new target before
    /// the generation's mutation and selection.
    pub fn advance(&mut self) -> Option<PhaseTransition> {
        let Self::Oscillating {
            phase,
            generations_in_phase,
            demography,
        } = self
        else {
            return None;
        };

        let mut transition = None;
        if *generations_in_phase == demography.duration_of(*phase) {
            let from = *phase;
            *phase = from.next();
            *generations_in_phase = 0;
            transition = Some(PhaseTransition {
                from,
                to: *phase,
                target_size: demography.size_of(*phase),
            });
        }
        *generations_in_phase += 1;

        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ExecutionConfig;

    fn oscillating_config(big_gens: usize, small_gens: usize) -> Configuration {
        Configuration {
            execution: ExecutionConfig::new(50, 10, None),
            demography: DemographyConfig::oscillating(100, 10, big_gens, small_gens),
            ..Configuration::default()
        }
    }

    #[test]
    fn test_constant_schedule_never_transitions() {
        let config = Configuration {
            demography: DemographyConfig::constant(),
            ..oscillating_config(1, 1)
        };
        let mut schedule = SizeSchedule::new(&config);

        assert_eq!(schedule.phase(), None);
        for _ in 0..100 {
            assert_eq!(schedule.advance(), None);
            assert_eq!(schedule.target_size(), 50);
        }
    }

    #[test]
    fn test_oscillating_schedule_starts_big() {
        let schedule = SizeSchedule::new(&oscillating_config(3, 2));
        assert_eq!(schedule.phase(), Some(Phase::Big));
        assert_eq!(schedule.target_size(), 100);
        assert_eq!(schedule.generations_in_phase(), 0);
    }

    #[test]
    fn test_transitions_at_phase_boundaries() {
        let mut schedule = SizeSchedule::new(&oscillating_config(2, 2));

        let transitions: Vec<(usize, PhaseTransition)> = (0..6)
            .filter_map(|generation| schedule.advance().map(|t| (generation, t)))
            .collect();

        assert_eq!(
            transitions,
            vec![
                (
                    2,
                    PhaseTransition {
                        from: Phase::Big,
                        to: Phase::Small,
                        target_size: 10
                    }
                ),
                (
                    4,
                    PhaseTransition {
                        from: Phase::Small,
                        to: Phase::Big,
                        target_size: 100
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_uneven_phase_durations() {
        let mut schedule = SizeSchedule::new(&oscillating_config(3, 1));
        let sizes: Vec<usize> = (0..9)
            .map(|_| {
                schedule.advance();
                schedule.target_size()
            })
            .collect();
        assert_eq!(sizes, vec![100, 100, 100, 10, 100, 100, 100, 10, 100]);
    }

    #[test]
    fn test_phase_display_and_next() {
        assert_eq!(Phase::Big.to_string(), "big");
        assert_eq!(Phase::Small.next(), Phase::Big);
    }
}
