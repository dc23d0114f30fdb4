//! Per-generation record of a simulation run.

use serde::{Deserialize, Serialize};

use crate::simulation::{Phase, PopulationSummary};

/// A scheduled resize that happened at the start of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeEvent {
    /// Generation whose mutation and selection ran on the resized population
    pub generation: usize,
    /// Size before the resize
    pub from: usize,
    /// Size after the resize
    pub to: usize,
    /// Phase entered by the resize
    pub phase: Phase,
}

/// Parallel per-generation sequences, indexed by generation number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Mean fitness after selection
    pub mean_fitness: Vec<f64>,
    /// Mean trait A after selection
    pub mean_a: Vec<f64>,
    /// Mean trait B after selection
    pub mean_b: Vec<f64>,
    /// Population size the generation ran with
    pub population_sizes: Vec<usize>,
    /// Scheduled resizes, in order
    pub resizes: Vec<ResizeEvent>,
}

impl Trajectory {
    /// Empty trajectory with room for `generations` records.
    pub fn with_capacity(generations: usize) -> Self {
        Self {
            mean_fitness: Vec::with_capacity(generations),
            mean_a: Vec::with_capacity(generations),
            mean_b: Vec::with_capacity(generations),
            population_sizes: Vec::with_capacity(generations),
            resizes: Vec::new(),
        }
    }

    /// Append the record of the next generation.
    pub fn push(&mut self, summary: PopulationSummary, population_size: usize) {
        self.mean_fitness.push(summary.mean_fitness);
        self.mean_a.push(summary.mean_a);
        self.mean_b.push(summary.mean_b);
        self.population_sizes.push(population_size);
    }

    /// Note a scheduled resize.
    pub fn push_resize(&mut self, event: ResizeEvent) {
        self.resizes.push(event);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.mean_fitness.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.mean_fitness.is_empty()
    }

    /// Summary of `generation`, if recorded.
    pub fn get(&self, generation: usize) -> Option<PopulationSummary> {
        Some(PopulationSummary {
            mean_fitness: *self.mean_fitness.get(generation)?,
            mean_a: *self.mean_a.get(generation)?,
            mean_b: *self.mean_b.get(generation)?,
        })
    }

    /// Summary of the last recorded generation.
    pub fn last(&self) -> Option<PopulationSummary> {
        self.len().checked_sub(1).and_then(|g| self.get(g))
    }

    /// Largest absolute change in mean trait A or B between consecutive
    /// generations, with the generation at which it happened.
    ///
    /// A punctuated trajectory shows long runs of tiny steps broken by a few
    /// large ones; this locates the largest.
    pub fn largest_shift(&self) -> Option<(usize, f64)> {
        (1..self.len())
            .map(|g| {
                let da = (self.mean_a[g] - self.mean_a[g - 1]).abs();
                let db = (self.mean_b[g] - self.mean_b[g - 1]).abs();
                (g, da.max(db))
            })
            .max_by(|x, y| x.1.total_cmp(&y.1))
    }
}
