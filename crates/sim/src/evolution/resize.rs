//! Population bottlenecks and expansions by resampling.
//!
//! Resizing draws the new population uniformly with replacement from the
//! old one. Trait values are copied verbatim, so a bottleneck loses
//! variation purely through sampling and an expansion duplicates existing
//! individuals.

use rand::Rng;

use crate::errors::ResizeError;
use crate::simulation::Population;

/// Resample `population` to exactly `target` individuals.
///
/// # Errors
/// Returns [`ResizeError::EmptySource`] if `population` is empty and
/// `target` is non-zero.
pub fn resize_population<R: Rng + ?Sized>(
    population: &Population,
    target: usize,
    rng: &mut R,
) -> Result<Population, ResizeError> {
    let source = population.individuals();
    if source.is_empty() && target > 0 {
        return Err(ResizeError::EmptySource { target });
    }

    let resized: Population = (0..target)
        .map(|_| source[rng.random_range(0..source.len())])
        .collect();

    tracing::trace!(from = source.len(), to = target, "resize pass");
    Ok(resized)
}
