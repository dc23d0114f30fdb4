//! Fitness-weighted selection by rejection sampling.
//!
//! The next generation is filled by repeatedly drawing a candidate uniformly
//! (with replacement) from the current population and accepting it with
//! probability
//!
//! ```text
//! p(f) = f^s / (f + mean_fitness)^s
//! ```
//!
//! where `f` is the candidate's fitness and `s` the selection strength. With
//! `s = 0` every draw is accepted and selection reduces to neutral
//! resampling (pure drift); larger `s` discriminates more sharply between fit
//! and unfit individuals. The output always has the same size as the input.
//!
//! A landscape where every individual has zero fitness makes acceptance
//! impossible. Selection therefore gives up after a bounded number of draws
//! and reports the starvation instead of looping forever.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::fitness::is_valid_fitness;
use crate::base::FitnessLandscape;
use crate::errors::{ConfigurationError, SelectionError};
use crate::simulation::Population;

/// Draw budget per output individual before selection is declared starved.
pub const ATTEMPTS_PER_INDIVIDUAL: usize = 100;

/// Fitness-proportional selection with a tunable exponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessSelection {
    /// Selection exponent `s` (>= 0.0)
    strength: f64,
}

impl FitnessSelection {
    /// Create a new selection operator.
    ///
    /// # Arguments
    /// * `strength` - Selection exponent (>= 0.0). 0.0 gives neutral drift.
    ///
    /// # Errors
    /// Returns an error if `strength` is negative or not finite.
    pub fn new(strength: f64) -> Result<Self, ConfigurationError> {
        if !(strength >= 0.0 && strength.is_finite()) {
            return Err(ConfigurationError::InvalidSelectionStrength(strength));
        }
        Ok(Self { strength })
    }

    /// Neutral selection (uniform resampling).
    pub fn neutral() -> Self {
        Self { strength: 0.0 }
    }

    /// Selection exponent.
    #[inline]
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Probability that a candidate of fitness `fitness` is accepted when
    /// the population mean fitness is `mean_fitness`.
    ///
    /// A zero acceptance bound (both values zero with `s > 0`) yields 0.0.
    pub fn acceptance_probability(&self, fitness: f64, mean_fitness: f64) -> f64 {
        let bound = (fitness + mean_fitness).powf(self.strength);
        if bound <= 0.0 {
            return 0.0;
        }
        (fitness.powf(self.strength) / bound).min(1.0)
    }

    /// One rejection-sampling trial: draw `u ~ U[0, (f + mean)^s)` and accept
    /// iff `u < f^s`.
    #[inline]
    fn accepts<R: Rng + ?Sized>(&self, fitness: f64, mean_fitness: f64, rng: &mut R) -> bool {
        let bound = (fitness + mean_fitness).powf(self.strength);
        rng.random::<f64>() * bound < fitness.powf(self.strength)
    }

    /// Select a new population of the same size as `population`.
    ///
    /// Mean fitness is computed once, before the first draw.
    ///
    /// # Errors
    /// - [`SelectionError::EmptyPopulation`] if there is nothing to draw from.
    /// - [`SelectionError::InvalidFitness`] if the landscape returns NaN or a
    ///   negative value for any individual.
    /// - [`SelectionError::Starvation`] if `ATTEMPTS_PER_INDIVIDUAL × N` draws
    ///   do not yield `N` accepted individuals.
    pub fn select<L, R>(
        &self,
        population: &Population,
        landscape: &L,
        rng: &mut R,
    ) -> Result<Population, SelectionError>
    where
        L: FitnessLandscape + ?Sized,
        R: Rng + ?Sized,
    {
        let target = population.size();
        if target == 0 {
            return Err(SelectionError::EmptyPopulation);
        }

        let fitness_values: Vec<f64> = population
            .iter()
            .map(|ind| landscape.individual_fitness(ind))
            .collect();

        if let Some((ind, &value)) = population
            .iter()
            .zip(&fitness_values)
            .find(|(_, f)| !is_valid_fitness(**f))
        {
            return Err(SelectionError::InvalidFitness {
                a: ind.a(),
                b: ind.b(),
                value,
            });
        }

        let mean_fitness = fitness_values.iter().sum::<f64>() / target as f64;
        let max_attempts = target.saturating_mul(ATTEMPTS_PER_INDIVIDUAL);
        let individuals = population.individuals();

        let mut selected = Vec::with_capacity(target);
        let mut attempts = 0usize;
        while selected.len() < target {
            if attempts == max_attempts {
                return Err(SelectionError::Starvation {
                    accepted: selected.len(),
                    target,
                    attempts,
                });
            }
            attempts += 1;

            let idx = rng.random_range(0..target);
            if self.accepts(fitness_values[idx], mean_fitness, rng) {
                selected.push(individuals[idx]);
            }
        }

        tracing::trace!(attempts, target, mean_fitness, "selection pass");
        Ok(Population::new(selected))
    }
}

impl Default for FitnessSelection {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::SineLandscape;
    use crate::genome::Individual;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::f64::consts::PI;

    struct ZeroLandscape;

    impl FitnessLandscape for ZeroLandscape {
        fn fitness(&self, _a: f64, _b: f64) -> f64 {
            0.0
        }
    }

    struct NegativeLandscape;

    impl FitnessLandscape for NegativeLandscape {
        fn fitness(&self, a: f64, _b: f64) -> f64 {
            a - 1.0
        }
    }

    fn peak_trait() -> f64 {
        // 7ab = pi/2 on the default landscape
        (PI / 14.0).sqrt()
    }

    fn half_peak_population(n: usize) -> Population {
        let p = peak_trait();
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    Individual::new(p, p)
                } else {
                    Individual::new(0.0, 0.0)
                }
            })
            .collect()
    }

    fn peak_fraction(pop: &Population) -> f64 {
        let p = peak_trait();
        pop.iter().filter(|ind| ind.a() == p).count() as f64 / pop.size() as f64
    }

    #[test]
    fn test_new_rejects_negative_strength() {
        assert_eq!(
            FitnessSelection::new(-0.5).unwrap_err(),
            ConfigurationError::InvalidSelectionStrength(-0.5)
        );
        assert!(FitnessSelection::new(f64::NAN).is_err());
        assert!(FitnessSelection::new(0.0).is_ok());
    }

    #[test]
    fn test_selection_preserves_size() {
        let selection = FitnessSelection::new(0.5).unwrap();
        let pop = half_peak_population(101);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);

        let next = selection
            .select(&pop, &SineLandscape::default(), &mut rng)
            .unwrap();
        assert_eq!(next.size(), 101);
    }

    #[test]
    fn test_selected_individuals_come_from_input() {
        let selection = FitnessSelection::new(2.0).unwrap();
        let pop: Population = (0..20)
            .map(|i| Individual::new(i as f64 * 0.05, 1.0 - i as f64 * 0.03))
            .collect();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);

        let next = selection
            .select(&pop, &SineLandscape::default(), &mut rng)
            .unwrap();
        for ind in next.iter() {
            assert!(pop.iter().any(|orig| orig == ind));
        }
    }

    #[test]
    fn test_neutral_selection_is_unbiased() {
        let selection = FitnessSelection::neutral();
        let pop = half_peak_population(4_000);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);

        let next = selection
            .select(&pop, &SineLandscape::default(), &mut rng)
            .unwrap();
        let fraction = peak_fraction(&next);
        assert!((fraction - 0.5).abs() < 0.05, "peak fraction {fraction}");
    }

    #[test]
    fn test_strong_selection_favours_fit_individuals() {
        // p(peak) = 4 / 3.5^2, p(origin) = 1 / 2.5^2 -> expected share ~0.67
        let selection = FitnessSelection::new(2.0).unwrap();
        let pop = half_peak_population(4_000);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);

        let next = selection
            .select(&pop, &SineLandscape::default(), &mut rng)
            .unwrap();
        let fraction = peak_fraction(&next);
        assert!(fraction > 0.6, "peak fraction {fraction}");
    }

    #[test]
    fn test_acceptance_probability() {
        let selection = FitnessSelection::new(1.0).unwrap();
        assert!((selection.acceptance_probability(1.0, 1.0) - 0.5).abs() < 1e-12);
        assert!((selection.acceptance_probability(2.0, 1.0) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(selection.acceptance_probability(0.0, 0.0), 0.0);

        let neutral = FitnessSelection::neutral();
        assert_eq!(neutral.acceptance_probability(0.3, 1.2), 1.0);
    }

    #[test]
    fn test_zero_fitness_starves() {
        let selection = FitnessSelection::new(0.5).unwrap();
        let pop = Population::zeroed(10);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);

        let err = selection.select(&pop, &ZeroLandscape, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SelectionError::Starvation {
                accepted: 0,
                target: 10,
                attempts: 10 * ATTEMPTS_PER_INDIVIDUAL,
            }
        );
    }

    #[test]
    fn test_zero_fitness_with_neutral_selection_still_fills() {
        // 0^0 == 1, so neutral selection accepts every draw
        let pop = Population::zeroed(10);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(6);

        let next = FitnessSelection::neutral()
            .select(&pop, &ZeroLandscape, &mut rng)
            .unwrap();
        assert_eq!(next.size(), 10);
    }

    #[test]
    fn test_negative_fitness_is_rejected() {
        let selection = FitnessSelection::new(0.5).unwrap();
        let pop = Population::new(vec![Individual::new(2.0, 0.0), Individual::new(0.5, 0.0)]);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);

        let err = selection
            .select(&pop, &NegativeLandscape, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidFitness {
                a: 0.5,
                b: 0.0,
                value: -0.5
            }
        );
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        let err = FitnessSelection::new(1.0)
            .unwrap()
            .select(&Population::default(), &SineLandscape::default(), &mut rng)
            .unwrap_err();
        assert_eq!(err, SelectionError::EmptyPopulation);
    }

    #[test]
    fn test_selection_is_reproducible_with_seed() {
        let selection = FitnessSelection::new(0.5).unwrap();
        let pop: Population = (0..50)
            .map(|i| Individual::new(i as f64 * 0.02, i as f64 * 0.04))
            .collect();
        let landscape = SineLandscape::default();

        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(42);
        assert_eq!(
            selection.select(&pop, &landscape, &mut rng1).unwrap(),
            selection.select(&pop, &landscape, &mut rng2).unwrap()
        );
    }
}
