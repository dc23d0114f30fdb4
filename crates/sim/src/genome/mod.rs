//! Genome structures: individuals and their trait loci.

mod individual;

pub use individual::{Individual, Locus};
