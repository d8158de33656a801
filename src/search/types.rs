//! Run results and per-iteration progress.

use super::config::OptimizationSettings;
use crate::domain::NamingDomainConfig;
use crate::fitness::EvaluationResult;

/// Which search strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    HillClimbing,
    SimulatedAnnealing,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::HillClimbing => f.write_str("hill climbing"),
            Strategy::SimulatedAnnealing => f.write_str("simulated annealing"),
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    IterationBudget,
    Converged,
    Cancelled,
}

/// Diagnostics for one completed iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationProgress {
    /// 1-based iteration index.
    pub iteration: usize,
    pub candidate_fitness: f64,
    /// Fitness of the current state after the accept/reject decision.
    pub current_fitness: f64,
    pub best_fitness: f64,
    pub accepted: bool,
    /// Temperature after this iteration's cooling step (annealing only).
    pub temperature: Option<f64>,
    /// Accepted moves so far divided by iterations so far.
    pub acceptance_rate: f64,
}

/// Outcome of one optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    pub strategy: Strategy,
    pub initial_config: NamingDomainConfig,
    /// Best-ever configuration, never the annealer's wandering state.
    pub optimized_config: NamingDomainConfig,
    pub initial_fitness: f64,
    pub final_fitness: f64,
    /// `final_fitness - initial_fitness`; may be zero.
    pub improvement: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Iteration at which the best-ever state was found (0 = initial).
    pub best_iteration: usize,
    pub accepted_moves: usize,
    pub stop_reason: StopReason,
    /// Evaluation of the unmodified initial domain.
    pub initial_evaluation: EvaluationResult,
    /// One entry per executed iteration, in order.
    pub evaluations: Vec<EvaluationResult>,
    /// Best-ever fitness: the initial value, then one entry per iteration.
    pub convergence_history: Vec<f64>,
    pub diagnostics: Vec<IterationProgress>,
    pub settings: OptimizationSettings,
    /// Seed the run actually used.
    pub seed: u64,
}
