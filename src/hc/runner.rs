//! Hill climbing execution.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;

use crate::domain::NameGenerator;
use crate::error::ConfigError;
use crate::search::driver::{run_search, AcceptanceRule};
use crate::search::{
    NoProgress, OptimizationResult, OptimizationSettings, ProgressObserver, Strategy,
    TuningProblem,
};

/// Accepts only strict improvements; ties are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl AcceptanceRule for Greedy {
    fn accept<R: Rng>(&mut self, delta: f64, _rng: &mut R) -> bool {
        delta > 0.0
    }
}

/// Executes greedy hill climbing over a naming domain's parameters.
///
/// Because only strictly better candidates are accepted, the current
/// state is always the best-ever state.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs hill climbing.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nameopt::domain::{NameGenerator, NamingDomainConfig};
    /// use u_nameopt::error::GenerationError;
    /// use u_nameopt::fitness::{FitnessEvaluator, FitnessWeights, ValidationSettings};
    /// use u_nameopt::hc::HillClimbRunner;
    /// use u_nameopt::search::{OptimizationSettings, TuningProblem};
    ///
    /// struct Fixed;
    /// impl NameGenerator for Fixed {
    ///     fn generate(&self, _: &NamingDomainConfig, _: u64, count: usize)
    ///         -> Result<Vec<String>, GenerationError> {
    ///         let pool = ["Aru", "Belis", "Cathen", "Doru"];
    ///         Ok(pool.iter().cycle().take(count).map(|s| s.to_string()).collect())
    ///     }
    /// }
    ///
    /// let evaluator = FitnessEvaluator::new(
    ///     Fixed,
    ///     ValidationSettings::default().with_required_names(8).with_sample_factor(1),
    ///     FitnessWeights::default(),
    /// ).unwrap();
    /// let problem = TuningProblem::new(NamingDomainConfig::new("demo"), evaluator);
    /// let settings = OptimizationSettings::default().with_iterations(5).with_seed(7);
    ///
    /// let result = HillClimbRunner::run(&problem, &settings).unwrap();
    /// assert!(result.evaluations.len() <= 5);
    /// ```
    pub fn run<G: NameGenerator>(
        problem: &TuningProblem<G>,
        settings: &OptimizationSettings,
    ) -> Result<OptimizationResult, ConfigError> {
        Self::run_with(problem, settings, &mut NoProgress, None)
    }

    /// Runs hill climbing with a progress observer and an optional
    /// cancellation flag, checked before each iteration.
    pub fn run_with<G, O>(
        problem: &TuningProblem<G>,
        settings: &OptimizationSettings,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<OptimizationResult, ConfigError>
    where
        G: NameGenerator,
        O: ProgressObserver + ?Sized,
    {
        run_search(
            problem,
            settings,
            Strategy::HillClimbing,
            Greedy,
            observer,
            cancel,
        )
    }
}
