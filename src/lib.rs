//! Parameter tuning for procedural naming domains.
//!
//! A naming domain is a phonology + morphology + style rule set that a
//! generator turns into names for one fictional culture. This crate tunes
//! the domain's numeric parameters so its names are varied, spread apart
//! and distinguishable from other domains' names:
//!
//! - **Codec** ([`codec`]): flattens the tunable fields into a parameter
//!   vector, clamps decoded values to bounds, perturbs vectors.
//! - **Fitness** ([`fitness`]): samples the generator and scores capacity,
//!   diffuseness and separation, combined by configurable weights.
//! - **Hill Climbing** ([`hc`]): greedy, strictly-improving local search.
//! - **Simulated Annealing** ([`sa`]): Metropolis acceptance with
//!   geometric cooling; returns the best state ever accepted.
//! - **Batch** ([`batch`]): independent runs over many domains, in
//!   parallel with the `parallel` feature.
//!
//! The generator itself is supplied by the caller through
//! [`domain::NameGenerator`]. Runs are single-threaded and reproducible
//! from one seed; no I/O happens inside the crate.
//!
//! # Architecture
//!
//! Strategies share one search loop ([`search`]) and differ only in their
//! acceptance rule. Problem definition (domain, evaluator, bounds) stays
//! separate from algorithm mechanics (settings, runners).

pub mod batch;
pub mod codec;
pub mod domain;
pub mod error;
pub mod fitness;
pub mod hc;
pub mod sa;
pub mod search;
pub mod seed;

#[cfg(test)]
pub(crate) mod testing;
