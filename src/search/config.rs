//! Settings shared by every search strategy.

use crate::codec::StepSizes;
use crate::error::ConfigError;
use crate::sa::AnnealingSettings;
use crate::seed::seed_from_label;

/// Configuration for an optimization run.
///
/// # Examples
///
/// ```
/// use u_nameopt::search::OptimizationSettings;
///
/// let settings = OptimizationSettings::default()
///     .with_iterations(50)
///     .with_convergence(0.005, 5)
///     .with_seed_label("t1");
/// assert_eq!(settings.iterations, 50);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationSettings {
    /// Iteration budget (candidate evaluations after the initial one).
    pub iterations: usize,

    /// Perturbation magnitudes per parameter class.
    pub step_sizes: StepSizes,

    /// Minimum best-ever gain for an iteration to count as progress.
    pub convergence_threshold: f64,

    /// Consecutive iterations without progress before stopping.
    /// 0 disables convergence-based termination.
    pub convergence_window: usize,

    /// Temperature schedule; read by simulated annealing only.
    pub annealing: AnnealingSettings,

    /// Random seed for reproducibility. `None` draws one at random; the
    /// seed actually used is reported in the result.
    pub seed: Option<u64>,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            iterations: 100,
            step_sizes: StepSizes::default(),
            convergence_threshold: 0.001,
            convergence_window: 10,
            annealing: AnnealingSettings::default(),
            seed: None,
        }
    }
}

impl OptimizationSettings {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_step_sizes(mut self, steps: StepSizes) -> Self {
        self.step_sizes = steps;
        self
    }

    pub fn with_convergence(mut self, threshold: f64, window: usize) -> Self {
        self.convergence_threshold = threshold;
        self.convergence_window = window;
        self
    }

    pub fn with_annealing(mut self, annealing: AnnealingSettings) -> Self {
        self.annealing = annealing;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seeds from a text label such as `"t1"`.
    pub fn with_seed_label(mut self, label: &str) -> Self {
        self.seed = Some(seed_from_label(label));
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.step_sizes.validate()?;
        if !self.convergence_threshold.is_finite() || self.convergence_threshold < 0.0 {
            return Err(ConfigError::InvalidSettings(format!(
                "convergence_threshold must be finite and non-negative, got {}",
                self.convergence_threshold
            )));
        }
        self.annealing.validate()?;
        Ok(())
    }
}
