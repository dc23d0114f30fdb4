//! Regression-to-mean mutation of trait alleles.
//!
//! Every allele of every individual mutates independently with probability
//! `rate`. A mutated allele does not drift from its current value; it is
//! redrawn from a normal distribution centred on the population mean of that
//! trait, with standard deviation `strength`. The mean is a single snapshot
//! taken from the population before any allele is touched, so the order in
//! which individuals are visited does not bias the draw.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::errors::ConfigurationError;
use crate::genome::{Individual, Locus};
use crate::simulation::Population;

/// Per-allele mutation toward the current population mean.
#[derive(Debug, Clone, Copy)]
pub struct RegressionMutation {
    /// Per-allele mutation probability
    rate: f64,
    /// Standard deviation of the replacement draw
    strength: f64,
    /// Zero-centred noise; shifted by the trait mean at draw time
    noise: Normal<f64>,
}

impl RegressionMutation {
    /// Create a new mutation operator.
    ///
    /// # Arguments
    /// * `rate` - Probability that a single allele mutates (0.0 to 1.0).
    ///   0.0 turns mutation off.
    /// * `strength` - Standard deviation of the normal draw (> 0.0).
    ///
    /// # Errors
    /// Returns an error if `rate` is outside [0.0, 1.0] or `strength` is not
    /// a positive finite number.
    pub fn new(rate: f64, strength: f64) -> Result<Self, ConfigurationError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigurationError::InvalidMutationRate(rate));
        }
        if !(strength > 0.0 && strength.is_finite()) {
            return Err(ConfigurationError::InvalidMutationStrength(strength));
        }
        let noise = Normal::new(0.0, strength)
            .map_err(|_| ConfigurationError::InvalidMutationStrength(strength))?;

        Ok(Self {
            rate,
            strength,
            noise,
        })
    }

    /// Per-allele mutation probability.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Standard deviation of the replacement draw.
    #[inline]
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Mutate every individual of `population` and return the result.
    ///
    /// The input is left untouched. Both trait means are read from the input
    /// before any allele is redrawn.
    pub fn mutate<R: Rng + ?Sized>(&self, population: &Population, rng: &mut R) -> Population {
        let means = [
            population.mean_trait(Locus::A),
            population.mean_trait(Locus::B),
        ];
        self.mutate_towards(population, means, rng)
    }

    /// Mutate every individual toward fixed trait means `[mean_a, mean_b]`.
    pub fn mutate_towards<R: Rng + ?Sized>(
        &self,
        population: &Population,
        means: [f64; 2],
        rng: &mut R,
    ) -> Population {
        let mutated: Population = population
            .iter()
            .map(|&individual| self.mutate_individual(individual, means, rng))
            .collect();

        tracing::trace!(size = mutated.size(), "mutation pass");
        mutated
    }

    /// Decide whether one allele mutates and, if so, draw its new value.
    #[inline]
    fn mutate_allele<R: Rng + ?Sized>(&self, mean: f64, rng: &mut R) -> Option<f64> {
        if rng.random::<f64>() < self.rate {
            Some(mean + self.noise.sample(rng))
        } else {
            None
        }
    }

    /// Mutate a single individual toward fixed trait means.
    pub fn mutate_individual<R: Rng + ?Sized>(
        &self,
        individual: Individual,
        means: [f64; 2],
        rng: &mut R,
    ) -> Individual {
        let mut child = individual;
        for (locus, mean) in Locus::ALL.into_iter().zip(means) {
            if let Some(value) = self.mutate_allele(mean, rng) {
                child.set(locus, value);
            }
        }
        child
    }
}
