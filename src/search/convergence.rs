//! Stall detection on the best-ever trajectory.

use crate::fitness::comparable;

/// Counts consecutive iterations whose best-ever gain falls short of
/// `threshold`.
#[derive(Debug, Clone)]
pub(crate) struct ConvergenceTracker {
    threshold: f64,
    window: usize,
    last_best: f64,
    stalled: usize,
}

impl ConvergenceTracker {
    pub(crate) fn new(threshold: f64, window: usize, initial_best: f64) -> Self {
        Self {
            threshold,
            window,
            last_best: comparable(initial_best),
            stalled: 0,
        }
    }

    /// Records the best-ever fitness after an iteration. Returns `true`
    /// once the stall count reaches the window.
    pub(crate) fn record(&mut self, best: f64) -> bool {
        let best = comparable(best);
        let gain = best - self.last_best;
        if gain > 0.0 && gain >= self.threshold {
            self.stalled = 0;
        } else {
            self.stalled += 1;
        }
        self.last_best = best;
        self.window > 0 && self.stalled >= self.window
    }
}
