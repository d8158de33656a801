//! The perturb → decode → evaluate → accept loop shared by all strategies.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use u_numflow::random::create_rng;

use super::config::OptimizationSettings;
use super::convergence::ConvergenceTracker;
use super::observer::ProgressObserver;
use super::problem::TuningProblem;
use super::types::{IterationProgress, OptimizationResult, StopReason, Strategy};
use crate::codec::{ParameterCodec, ParameterLayout};
use crate::domain::NameGenerator;
use crate::error::ConfigError;
use crate::fitness::comparable;

/// Decides whether the search moves to a candidate.
///
/// `delta` is `fitness(candidate) - fitness(current)`, with NaN fitness
/// treated as negative infinity; it is NaN only when both are NaN.
pub trait AcceptanceRule {
    fn accept<R: Rng>(&mut self, delta: f64, rng: &mut R) -> bool;

    /// Called once at the end of every iteration, after acceptance.
    fn end_iteration(&mut self) {}

    /// Current temperature, for rules that have one.
    fn temperature(&self) -> Option<f64> {
        None
    }
}

pub(crate) fn run_search<G, A, O>(
    problem: &TuningProblem<G>,
    settings: &OptimizationSettings,
    strategy: Strategy,
    mut rule: A,
    observer: &mut O,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<OptimizationResult, ConfigError>
where
    G: NameGenerator,
    A: AcceptanceRule,
    O: ProgressObserver + ?Sized,
{
    settings.validate()?;
    problem.validate()?;

    let seed = settings.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = create_rng(seed);

    let template = problem.initial();
    let evaluator = problem.evaluator();
    let layout = ParameterLayout::of(template);

    log::info!(
        "{strategy} on '{}': {} parameters, {} iterations, seed {seed}",
        template.id,
        layout.len(),
        settings.iterations
    );

    let initial = evaluator.evaluate(template, &ParameterCodec::encode(template), 0);
    let mut current = initial.clone();
    let mut best = initial.clone();
    let mut best_iteration = 0;

    let mut evaluations = Vec::with_capacity(settings.iterations);
    let mut diagnostics = Vec::with_capacity(settings.iterations);
    let mut convergence_history = Vec::with_capacity(settings.iterations + 1);
    convergence_history.push(best.fitness);

    let mut tracker = ConvergenceTracker::new(
        settings.convergence_threshold,
        settings.convergence_window,
        best.fitness,
    );
    let mut accepted_moves = 0usize;
    let mut iterations = 0usize;
    let mut stop_reason = StopReason::IterationBudget;

    for iteration in 1..=settings.iterations {
        if let Some(ref flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                stop_reason = StopReason::Cancelled;
                break;
            }
        }

        let proposal =
            ParameterCodec::perturb(&current.theta, &layout, &settings.step_sizes, &mut rng);
        let domain = ParameterCodec::decode(&proposal, template, problem.bounds())?;
        let theta = ParameterCodec::encode(&domain);
        let candidate = evaluator.evaluate(&domain, &theta, iteration);

        let delta = comparable(candidate.fitness) - comparable(current.fitness);
        let accepted = rule.accept(delta, &mut rng);
        if accepted {
            accepted_moves += 1;
            if candidate.improves_on(&best) {
                best = candidate.clone();
                best_iteration = iteration;
            }
            current = candidate.clone();
        }
        rule.end_iteration();

        let progress = IterationProgress {
            iteration,
            candidate_fitness: candidate.fitness,
            current_fitness: current.fitness,
            best_fitness: best.fitness,
            accepted,
            temperature: rule.temperature(),
            acceptance_rate: accepted_moves as f64 / iteration as f64,
        };
        log::debug!(
            "iteration {iteration}: candidate {:.4} current {:.4} best {:.4} accepted {accepted}",
            progress.candidate_fitness,
            progress.current_fitness,
            progress.best_fitness
        );
        observer.on_iteration(&progress);

        evaluations.push(candidate);
        diagnostics.push(progress);
        convergence_history.push(best.fitness);
        iterations = iteration;

        if tracker.record(best.fitness) {
            stop_reason = StopReason::Converged;
            break;
        }
    }

    log::info!(
        "{strategy} on '{}' done: {iterations} iterations ({stop_reason:?}), {:.4} -> {:.4}",
        template.id,
        initial.fitness,
        best.fitness
    );

    Ok(OptimizationResult {
        strategy,
        initial_config: template.clone(),
        optimized_config: best.config.clone(),
        initial_fitness: initial.fitness,
        final_fitness: best.fitness,
        improvement: best.fitness - initial.fitness,
        iterations,
        best_iteration,
        accepted_moves,
        stop_reason,
        initial_evaluation: initial,
        evaluations,
        convergence_history,
        diagnostics,
        settings: settings.clone(),
        seed,
    })
}
