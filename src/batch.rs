//! Independent optimization of several domains.
//!
//! Each problem gets its own seed, derived from the base seed and the
//! domain id, so results do not depend on scheduling order. With the
//! `parallel` feature the runs execute on the rayon thread pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::NameGenerator;
use crate::error::ConfigError;
use crate::hc::HillClimbRunner;
use crate::sa::AnnealingRunner;
use crate::search::{OptimizationResult, OptimizationSettings, Strategy, TuningProblem};
use crate::seed::{mix, seed_from_label};

impl Strategy {
    /// Runs this strategy on one problem.
    pub fn run<G: NameGenerator>(
        self,
        problem: &TuningProblem<G>,
        settings: &OptimizationSettings,
    ) -> Result<OptimizationResult, ConfigError> {
        match self {
            Strategy::HillClimbing => HillClimbRunner::run(problem, settings),
            Strategy::SimulatedAnnealing => AnnealingRunner::run(problem, settings),
        }
    }
}

/// Settings for one member of a batch: the base seed mixed with the
/// domain id. An unseeded base leaves every member unseeded.
pub fn member_settings(settings: &OptimizationSettings, domain_id: &str) -> OptimizationSettings {
    let mut member = settings.clone();
    member.seed = settings.seed.map(|s| mix(s, seed_from_label(domain_id)));
    member
}

/// Optimizes every problem independently; results keep input order.
///
/// A configuration error in one problem does not affect the others.
pub fn optimize_batch<G: NameGenerator>(
    problems: &[TuningProblem<G>],
    settings: &OptimizationSettings,
    strategy: Strategy,
) -> Vec<Result<OptimizationResult, ConfigError>> {
    log::info!("batch {strategy}: {} domains", problems.len());

    #[cfg(feature = "parallel")]
    let results = problems
        .par_iter()
        .map(|p| strategy.run(p, &member_settings(settings, &p.initial().id)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = problems
        .iter()
        .map(|p| strategy.run(p, &member_settings(settings, &p.initial().id)))
        .collect();

    results
}
