//! Simulated Annealing (SA).
//!
//! Accepts worsening parameter moves with a probability that decreases as
//! the temperature cools, letting the search escape local optima that
//! would trap a greedy climber.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::AnnealingSettings;
pub use runner::{metropolis_accept, AnnealingRunner, MetropolisSchedule};
