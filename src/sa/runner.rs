//! SA execution.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;

use super::config::AnnealingSettings;
use crate::domain::NameGenerator;
use crate::error::ConfigError;
use crate::search::driver::{run_search, AcceptanceRule};
use crate::search::{
    NoProgress, OptimizationResult, OptimizationSettings, ProgressObserver, Strategy,
    TuningProblem,
};

/// Metropolis criterion for maximization.
///
/// Improvements (`delta > 0`) are always accepted. Otherwise the move is
/// accepted with probability `exp(delta / temperature)`, using one uniform
/// draw from `rng`. Below `floor` (or for NaN `delta`) non-improving moves
/// are rejected without drawing.
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, floor: f64, rng: &mut R) -> bool {
    if delta > 0.0 {
        return true;
    }
    if delta.is_nan() || !(temperature > floor) || temperature <= 0.0 {
        return false;
    }
    let probability = (delta / temperature).exp();
    rng.random::<f64>() < probability
}

/// Geometric cooling with Metropolis acceptance.
#[derive(Debug, Clone)]
pub struct MetropolisSchedule {
    temperature: f64,
    cooling_rate: f64,
    floor: f64,
}

impl MetropolisSchedule {
    pub fn new(settings: &AnnealingSettings) -> Self {
        Self {
            temperature: settings.initial_temperature,
            cooling_rate: settings.cooling_rate,
            floor: settings.temperature_floor,
        }
    }
}

impl AcceptanceRule for MetropolisSchedule {
    fn accept<R: Rng>(&mut self, delta: f64, rng: &mut R) -> bool {
        metropolis_accept(delta, self.temperature, self.floor, rng)
    }

    fn end_iteration(&mut self) {
        self.temperature *= self.cooling_rate;
    }

    fn temperature(&self) -> Option<f64> {
        Some(self.temperature)
    }
}

/// Executes simulated annealing over a naming domain's parameters.
///
/// The current state may move to worse candidates; the returned
/// `optimized_config` is always the best state ever accepted.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs SA optimization.
    pub fn run<G: NameGenerator>(
        problem: &TuningProblem<G>,
        settings: &OptimizationSettings,
    ) -> Result<OptimizationResult, ConfigError> {
        Self::run_with(problem, settings, &mut NoProgress, None)
    }

    /// Runs SA with a progress observer and an optional cancellation flag.
    ///
    /// The flag is checked before each iteration; a cancelled run still
    /// returns a complete result for the iterations that ran.
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
        let schedule = MetropolisSchedule::new(&settings.annealing);
        run_search(
            problem,
            settings,
            Strategy::SimulatedAnnealing,
            schedule,
            observer,
            cancel,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::{FitnessEvaluator, FitnessWeights, ValidationSettings};
    use crate::search::{IterationProgress, StopReason};
    use crate::testing::{sample_domain, ToyGenerator};
    use u_numflow::random::create_rng;

    fn problem(id: &str) -> TuningProblem<ToyGenerator> {
        let evaluator = FitnessEvaluator::new(
            ToyGenerator,
            ValidationSettings::default()
                .with_required_names(20)
                .with_sample_factor(2),
            FitnessWeights::default(),
        )
        .unwrap();
        TuningProblem::new(sample_domain(id), evaluator)
    }

    fn settings(iterations: usize) -> OptimizationSettings {
        OptimizationSettings::default()
            .with_iterations(iterations)
            .with_convergence(0.001, 0)
            .with_seed(42)
    }

    #[test]
    fn test_temperature_sequence_is_unconditional() {
        let settings = OptimizationSettings::default()
            .with_iterations(3)
            .with_annealing(
                AnnealingSettings::default()
                    .with_initial_temperature(1.0)
                    .with_cooling_rate(0.9),
            )
            .with_seed_label("t1");

        let result = AnnealingRunner::run(&problem("scenario-b"), &settings).unwrap();

        let temps: Vec<f64> = result
            .diagnostics
            .iter()
            .map(|d| d.temperature.unwrap())
            .collect();
        let expected = [0.9, 0.81, 0.729];
        assert_eq!(temps.len(), 3);
        for (t, e) in temps.iter().zip(expected) {
            assert!((t - e).abs() < 1e-12, "temperature {t} != {e}");
        }
    }

    #[test]
    fn test_acceptance_rate_matches_boltzmann() {
        let mut rng = create_rng(2024);
        let trials = 20_000;
        for (delta, temperature) in [(-0.1, 0.2), (-0.5, 1.0), (-0.05, 0.01)] {
            let accepted = (0..trials)
                .filter(|_| metropolis_accept(delta, temperature, 1e-12, &mut rng))
                .count();
            let rate = accepted as f64 / trials as f64;
            let expected = f64::exp(delta / temperature);
            assert!(
                (rate - expected).abs() < 0.02,
                "delta {delta} T {temperature}: rate {rate} vs expected {expected}"
            );
        }
    }

    #[test]
    fn test_improvement_always_accepted() {
        let mut rng = create_rng(1);
        assert!(metropolis_accept(1e-9, 1e-30, 1e-12, &mut rng));
        assert!(metropolis_accept(0.5, 0.0, 1e-12, &mut rng));
    }

    #[test]
    fn test_below_floor_rejects_non_improving() {
        let mut rng = create_rng(1);
        for _ in 0..1000 {
            assert!(!metropolis_accept(0.0, 1e-13, 1e-12, &mut rng));
            assert!(!metropolis_accept(-1e-9, 0.0, 0.0, &mut rng));
            assert!(!metropolis_accept(f64::NAN, 1.0, 1e-12, &mut rng));
        }
    }

    #[test]
    fn test_best_ever_history_non_decreasing() {
        let result = AnnealingRunner::run(&problem("mono"), &settings(40)).unwrap();

        assert_eq!(result.convergence_history.len(), result.iterations + 1);
        for window in result.convergence_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best-ever history should be non-decreasing: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_optimized_config_is_best_ever() {
        let result = AnnealingRunner::run(&problem("best"), &settings(40)).unwrap();

        let max_accepted = result
            .diagnostics
            .iter()
            .filter(|d| d.accepted)
            .map(|d| d.candidate_fitness)
            .fold(result.initial_fitness, f64::max);
        assert_eq!(result.final_fitness, max_accepted);
        assert!(result.improvement >= 0.0);

        if result.best_iteration == 0 {
            assert_eq!(result.optimized_config, result.initial_config);
        } else {
            let best = &result.evaluations[result.best_iteration - 1];
            assert_eq!(best.iteration, result.best_iteration);
            assert_eq!(result.optimized_config, best.config);
            assert_eq!(result.final_fitness, best.fitness);
        }
    }

    #[test]
    fn test_hot_schedule_accepts_worsening_moves() {
        let settings = settings(60).with_annealing(
            AnnealingSettings::default()
                .with_initial_temperature(1e6)
                .with_cooling_rate(1.0),
        );
        let result = AnnealingRunner::run(&problem("hot"), &settings).unwrap();

        assert_eq!(result.accepted_moves, result.iterations);
        let worse_accepted = result
            .diagnostics
            .windows(2)
            .any(|w| w[1].current_fitness < w[0].current_fitness);
        assert!(worse_accepted, "expected at least one downhill move at T=1e6");
    }

    #[test]
    fn test_deterministic_for_seed() {
        let p = problem("repeat");
        let a = AnnealingRunner::run(&p, &settings(15)).unwrap();
        let b = AnnealingRunner::run(&p, &settings(15)).unwrap();
        assert_eq!(a.evaluations, b.evaluations);
        assert_eq!(a.diagnostics, b.diagnostics);
        assert_eq!(a.optimized_config, b.optimized_config);
    }

    #[test]
    fn test_observer_sees_every_iteration() {
        let mut seen: Vec<IterationProgress> = Vec::new();
        let mut observer = |p: &IterationProgress| seen.push(*p);
        let result =
            AnnealingRunner::run_with(&problem("watch"), &settings(7), &mut observer, None)
                .unwrap();
        assert_eq!(seen, result.diagnostics);
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_cancellation() {
        let cancel = Arc::new(AtomicBool::new(true));
        let result = AnnealingRunner::run_with(
            &problem("stop"),
            &settings(50),
            &mut NoProgress,
            Some(cancel),
        )
        .unwrap();
        assert_eq!(result.stop_reason, StopReason::Cancelled);
        assert_eq!(result.iterations, 0);
        assert!(result.evaluations.is_empty());
        assert_eq!(result.optimized_config, result.initial_config);
    }

    #[test]
    fn test_invalid_schedule_fails_before_evaluation() {
        let settings = settings(5)
            .with_annealing(AnnealingSettings::default().with_cooling_rate(0.0));
        assert!(AnnealingRunner::run(&problem("bad"), &settings).is_err());
    }
}
