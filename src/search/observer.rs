//! Progress observers.

use super::types::IterationProgress;

/// Receives diagnostics after every iteration.
///
/// Observers are write-only from the search's point of view: nothing they
/// do feeds back into acceptance or termination. Any
/// `FnMut(&IterationProgress)` closure is an observer.
pub trait ProgressObserver {
    fn on_iteration(&mut self, progress: &IterationProgress);
}

impl<F: FnMut(&IterationProgress)> ProgressObserver for F {
    fn on_iteration(&mut self, progress: &IterationProgress) {
        self(progress)
    }
}

/// Discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_iteration(&mut self, _progress: &IterationProgress) {}
}

/// Forwards progress to `log::info!` every `every` iterations.
#[derive(Debug, Clone, Copy)]
pub struct LogProgress {
    pub every: usize,
}

impl Default for LogProgress {
    fn default() -> Self {
        Self { every: 1 }
    }
}

impl ProgressObserver for LogProgress {
    fn on_iteration(&mut self, p: &IterationProgress) {
        if self.every == 0 || p.iteration % self.every != 0 {
            return;
        }
        match p.temperature {
            Some(t) => log::info!(
                "iter {:>4}: current {:.4} best {:.4} T {:.5} accept {:.2}",
                p.iteration,
                p.current_fitness,
                p.best_fitness,
                t,
                p.acceptance_rate
            ),
            None => log::info!(
                "iter {:>4}: current {:.4} best {:.4} accept {:.2}",
                p.iteration,
                p.current_fitness,
                p.best_fitness,
                p.acceptance_rate
            ),
        }
    }
}
