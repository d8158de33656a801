//! Fitness evaluation of candidate naming domains.
//!
//! Each evaluation draws `min(required_names * sample_factor,
//! max_sample_size)` names from the generator, with a seed derived from the
//! domain id and the iteration index, and scores them on three axes:
//!
//! - **Capacity**: variety without collisions.
//! - **Diffuseness**: how far apart names sit from their nearest neighbors.
//! - **Separation**: distance from other domains' output.
//!
//! Fitness is the weighted mean of the three.

mod config;
mod evaluator;
pub mod metrics;

pub use config::{FitnessWeights, ValidationSettings};
pub use evaluator::{comparable, EvaluationResult, FitnessEvaluator, ReferenceSample, Scores};
