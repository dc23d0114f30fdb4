//! Evolution module providing the stochastic transition operators.
//!
//! - **Mutation**: per-allele regression-to-mean redraws
//! - **Selection**: fitness-weighted rejection sampling
//! - **Resize**: resampling to a new population size at bottlenecks and expansions

pub mod mutation;
pub mod resize;
pub mod selection;

pub use mutation::RegressionMutation;
pub use resize::resize_population;
pub use selection::{FitnessSelection, ATTEMPTS_PER_INDIVIDUAL};
