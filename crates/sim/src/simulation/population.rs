//! Population management and summary statistics.
//!
//! A population is an ordered collection of two-trait individuals. Its size
//! only changes at scheduled resize points; mutation and selection always
//! hand back a population of the same size they were given.

use serde::{Deserialize, Serialize};

use crate::base::FitnessLandscape;
use crate::genome::{Individual, Locus};

/// A finite population of two-trait individuals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
}

impl Population {
    /// Create a new population from individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Create a population of `size` copies of `individual`.
    pub fn uniform(size: usize, individual: Individual) -> Self {
        Self {
            individuals: vec![individual; size],
        }
    }

    /// Create a population of `size` individuals with both traits at zero.
    pub fn zeroed(size: usize) -> Self {
        Self::uniform(size, Individual::default())
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals as a slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Get a specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Iterate over the individuals.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// Consume the population and return its individuals.
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Mean value of the trait at `locus`.
    ///
    /// Returns NaN for an empty population.
    pub fn mean_trait(&self, locus: Locus) -> f64 {
        let total: f64 = self.individuals.iter().map(|ind| ind.get(locus)).sum();
        total / self.size() as f64
    }

    /// Mean fitness on `landscape`.
    ///
    /// Returns NaN for an empty population.
    pub fn mean_fitness<L: FitnessLandscape + ?Sized>(&self, landscape: &L) -> f64 {
        let total: f64 = self
            .individuals
            .iter()
            .map(|ind| landscape.individual_fitness(ind))
            .sum();
        total / self.size() as f64
    }

    /// Mean fitness and per-trait means in one pass.
    pub fn summary<L: FitnessLandscape + ?Sized>(&self, landscape: &L) -> PopulationSummary {
        let n = self.size() as f64;
        let (fit, a, b) = self
            .individuals
            .iter()
            .fold((0.0, 0.0, 0.0), |(fit, a, b), ind| {
                (fit + landscape.individual_fitness(ind), a + ind.a(), b + ind.b())
            });

        PopulationSummary {
            mean_fitness: fit / n,
            mean_a: a / n,
            mean_b: b / n,
        }
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

/// Population-wide means recorded once per generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    /// Mean fitness
    pub mean_fitness: f64,
    /// Mean trait A value
    pub mean_a: f64,
    /// Mean trait B value
    pub mean_b: f64,
}

impl PopulationSummary {
    /// Mean of the trait at `locus`.
    pub fn mean_trait(&self, locus: Locus) -> f64 {
        match locus {
            Locus::A => self.mean_a,
            Locus::B => self.mean_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::fitness::fitness;
    use crate::base::SineLandscape;

    fn create_test_population() -> Population {
        Population::new(vec![
            Individual::new(1.0, 2.0),
            Individual::new(3.0, -2.0),
            Individual::new(-1.0, 0.5),
            Individual::new(1.0, 1.5),
        ])
    }

    #[test]
    fn test_population_new() {
        let pop = create_test_population();
        assert_eq!(pop.size(), 4);
        assert!(!pop.is_empty());
        assert_eq!(pop.get(1), Some(&Individual::new(3.0, -2.0)));
        assert!(pop.get(4).is_none());
    }

    #[test]
    fn test_population_empty() {
        let pop = Population::default();
        assert_eq!(pop.size(), 0);
        assert!(pop.is_empty());
        assert!(pop.mean_trait(Locus::A).is_nan());
    }

    #[test]
    fn test_into_individuals_keeps_order() {
        let pop = create_test_population();
        let expected: Vec<Individual> = pop.iter().copied().collect();

        let individuals = pop.into_individuals();
        assert_eq!(individuals, expected);
        assert_eq!(individuals[2], Individual::new(-1.0, 0.5));
    }

    #[test]
    fn test_population_zeroed() {
        let pop = Population::zeroed(5);
        assert_eq!(pop.size(), 5);
        assert!(pop.iter().all(|ind| ind.traits() == (0.0, 0.0)));
    }

    #[test]
    fn test_mean_traits() {
        let pop = create_test_population();
        assert_eq!(pop.mean_trait(Locus::A), 1.0);
        assert_eq!(pop.mean_trait(Locus::B), 0.5);
    }

    #[test]
    fn test_mean_fitness() {
        let pop = create_test_population();
        let expected = pop.iter().map(|i| fitness(i.a(), i.b())).sum::<f64>() / 4.0;
        let mean = pop.mean_fitness(&SineLandscape::default());
        assert!((mean - expected).abs() < 1e-12);
    }

    #[test]
    fn test_summary_matches_individual_means() {
        let pop = create_test_population();
        let landscape = SineLandscape::default();
        let summary = pop.summary(&landscape);

        assert!((summary.mean_fitness - pop.mean_fitness(&landscape)).abs() < 1e-12);
        assert!((summary.mean_a - pop.mean_trait(Locus::A)).abs() < 1e-12);
        assert!((summary.mean_b - pop.mean_trait(Locus::B)).abs() < 1e-12);
        assert_eq!(summary.mean_trait(Locus::B), summary.mean_b);
    }

    #[test]
    fn test_zeroed_population_summary() {
        let summary = Population::zeroed(10).summary(&SineLandscape::default());
        assert_eq!(summary.mean_fitness, 1.0);
        assert_eq!(summary.mean_a, 0.0);
        assert_eq!(summary.mean_b, 0.0);
    }

    #[test]
    fn test_collect_into_population() {
        let pop: Population = (0..3).map(|i| Individual::new(i as f64, 0.0)).collect();
        assert_eq!(pop.size(), 3);
        assert_eq!(pop.mean_trait(Locus::A), 1.0);
    }
}
