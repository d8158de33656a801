//! Hill Climbing (HC).
//!
//! Greedy local search: perturb the current parameters and move only when
//! the candidate is strictly fitter. Cheap and monotone, but stops at the
//! first local optimum; see [`sa`](crate::sa) for a strategy that can
//! escape one.

mod runner;

pub use runner::{Greedy, HillClimbRunner};
