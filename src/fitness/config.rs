//! Sampling settings and fitness weights.

use crate::error::ConfigError;

/// How many names to sample and the thresholds the sub-scores compare
/// against.
///
/// # Examples
///
/// ```
/// use u_nameopt::fitness::ValidationSettings;
///
/// let settings = ValidationSettings::default()
///     .with_required_names(50)
///     .with_sample_factor(4)
///     .with_max_sample_size(150);
/// assert_eq!(settings.sample_size(), 150);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationSettings {
    /// Names the domain is expected to supply.
    pub required_names: usize,
    /// Oversampling multiplier applied to `required_names`.
    pub sample_factor: usize,
    /// Hard cap on the sample size.
    pub max_sample_size: usize,
    /// Target 5th-percentile nearest-neighbor distance between names
    /// (normalized edit distance, in [0, 1]).
    pub min_nn_p5: f64,
    /// Same as `min_nn_p5`, measured on consonant/vowel shapes.
    pub min_shape_nn_p5: f64,
    /// Target distance between this domain's centroid and any other's.
    pub min_centroid_distance: f64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            required_names: 100,
            sample_factor: 5,
            max_sample_size: 500,
            min_nn_p5: 0.3,
            min_shape_nn_p5: 0.2,
            min_centroid_distance: 0.2,
        }
    }
}

impl ValidationSettings {
    pub fn with_required_names(mut self, n: usize) -> Self {
        self.required_names = n;
        self
    }

    pub fn with_sample_factor(mut self, factor: usize) -> Self {
        self.sample_factor = factor;
        self
    }

    pub fn with_max_sample_size(mut self, n: usize) -> Self {
        self.max_sample_size = n;
        self
    }

    pub fn with_min_nn_p5(mut self, value: f64) -> Self {
        self.min_nn_p5 = value;
        self
    }

    pub fn with_min_shape_nn_p5(mut self, value: f64) -> Self {
        self.min_shape_nn_p5 = value;
        self
    }

    pub fn with_min_centroid_distance(mut self, value: f64) -> Self {
        self.min_centroid_distance = value;
        self
    }

    /// `min(required_names * sample_factor, max_sample_size)`.
    pub fn sample_size(&self) -> usize {
        self.required_names
            .saturating_mul(self.sample_factor)
            .min(self.max_sample_size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size() == 0 {
            return Err(ConfigError::InvalidValidation(
                "sample size must be positive".into(),
            ));
        }
        let thresholds = [
            ("min_nn_p5", self.min_nn_p5),
            ("min_shape_nn_p5", self.min_shape_nn_p5),
            ("min_centroid_distance", self.min_centroid_distance),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValidation(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Relative importance of each sub-score.
///
/// Weights need not sum to one; the evaluator divides by the sum of the
/// capacity, diffuseness and separation weights. `style` is reserved for
/// an external style scorer and does not enter the combination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessWeights {
    pub capacity: f64,
    pub diffuseness: f64,
    pub separation: f64,
    pub style: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            capacity: 1.0,
            diffuseness: 1.0,
            separation: 1.0,
            style: 0.0,
        }
    }
}

impl FitnessWeights {
    pub fn new(capacity: f64, diffuseness: f64, separation: f64) -> Self {
        Self {
            capacity,
            diffuseness,
            separation,
            style: 0.0,
        }
    }

    pub fn with_style(mut self, style: f64) -> Self {
        self.style = style;
        self
    }

    /// Sum of the weights that enter the fitness combination.
    pub fn active_total(&self) -> f64 {
        self.capacity + self.diffuseness + self.separation
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("capacity", self.capacity),
            ("diffuseness", self.diffuseness),
            ("separation", self.separation),
            ("style", self.style),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        if self.active_total() <= 0.0 {
            return Err(ConfigError::ZeroWeights);
        }
        Ok(())
    }
}
