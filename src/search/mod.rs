//! Local search over parameter vectors.
//!
//! Every strategy runs the same loop and differs only in its
//! [`AcceptanceRule`]:
//!
//! 1. Encode the initial domain and evaluate it once (iteration 0)
//! 2. Each iteration:
//!    a. Perturb the current vector and decode it against the initial domain
//!    b. Evaluate the candidate
//!    c. Accept or reject it; an accepted candidate that beats the
//!    best-ever state replaces it
//!    d. Record the evaluation and best-ever fitness, notify the observer
//!    e. Stop on cancellation or when best-ever has stalled for
//!    `convergence_window` iterations
//! 3. Return the best-ever configuration with the full trace
//!
//! One seeded generator drives both perturbation and acceptance draws, so
//! a run is reproducible from its seed alone.

mod config;
mod convergence;
pub(crate) mod driver;
mod observer;
mod problem;
mod types;

pub use config::OptimizationSettings;
pub use driver::AcceptanceRule;
pub use observer::{LogProgress, NoProgress, ProgressObserver};
pub use problem::TuningProblem;
pub use types::{IterationProgress, OptimizationResult, StopReason, Strategy};
