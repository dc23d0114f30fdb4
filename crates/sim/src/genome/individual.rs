use serde::{Deserialize, Serialize};

/// An individual with a two-trait phenotype.
///
/// `Individual` carries one real-valued allele for each of the two traits
/// (A and B). It has no identity beyond its trait values: two individuals
/// with equal traits are indistinguishable, and resampling may copy the same
/// individual several times into a population.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Individual {
    /// Trait A allele value
    a: f64,
    /// Trait B allele value
    b: f64,
}

impl Individual {
    /// Create a new `Individual` from its two trait values.
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Trait A value.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Trait B value.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Value of the trait at `locus`.
    #[inline]
    pub fn get(&self, locus: Locus) -> f64 {
        match locus {
            Locus::A => self.a,
            Locus::B => self.b,
        }
    }

    /// Overwrite the trait at `locus`.
    #[inline]
    pub fn set(&mut self, locus: Locus, value: f64) {
        match locus {
            Locus::A => self.a = value,
            Locus::B => self.b = value,
        }
    }

    /// Both trait values as a tuple `(a, b)`.
    #[inline]
    pub fn traits(&self) -> (f64, f64) {
        (self.a, self.b)
    }
}

impl From<(f64, f64)> for Individual {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

/// One of the two trait loci of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locus {
    A,
    B,
}

impl Locus {
    /// Both loci, in the order they are visited by the operators.
    pub const ALL: [Locus; 2] = [Locus::A, Locus::B];
}
