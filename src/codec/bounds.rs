//! Parameter bounds and perturbation step sizes.

use crate::error::ConfigError;

/// Closed interval `[min, max]` for one parameter kind.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range.
    ///
    /// NaN maps to `min`; infinities saturate at the nearer end. An inverted
    /// range never panics: `max` wins.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.max(self.min).min(self.max)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(
        &self,
        parameter: &'static str,
        lower: f64,
        upper: f64,
    ) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFiniteBounds {
                parameter,
                min: self.min,
                max: self.max,
            });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                parameter,
                min: self.min,
                max: self.max,
            });
        }
        if self.min < lower || self.max > upper {
            return Err(ConfigError::BoundsOutOfDomain {
                parameter,
                min: self.min,
                max: self.max,
                lower,
                upper,
            });
        }
        Ok(())
    }
}

/// Clamping bounds applied when decoding a parameter vector.
///
/// # Examples
///
/// ```
/// use u_nameopt::codec::{ParamRange, ParameterBounds};
///
/// let bounds = ParameterBounds::default()
///     .with_length(ParamRange::new(2.0, 6.0))
///     .with_apostrophe_rate(ParamRange::new(0.0, 0.2));
/// assert!(bounds.validate().is_ok());
///
/// let inverted = ParameterBounds::default().with_hyphen_rate(ParamRange::new(0.5, 0.1));
/// assert!(inverted.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterBounds {
    pub structure_weight: ParamRange,
    pub apostrophe_rate: ParamRange,
    pub hyphen_rate: ParamRange,
    /// Syllable count bounds. Both ends must be whole numbers >= 1.
    pub length: ParamRange,
    /// Shared by the favored-cluster and preferred-ending boosts.
    pub boost: ParamRange,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            structure_weight: ParamRange::new(0.0, 10.0),
            apostrophe_rate: ParamRange::new(0.0, 1.0),
            hyphen_rate: ParamRange::new(0.0, 1.0),
            length: ParamRange::new(1.0, 12.0),
            boost: ParamRange::new(0.0, 5.0),
        }
    }
}

impl ParameterBounds {
    pub fn with_structure_weight(mut self, range: ParamRange) -> Self {
        self.structure_weight = range;
        self
    }

    pub fn with_apostrophe_rate(mut self, range: ParamRange) -> Self {
        self.apostrophe_rate = range;
        self
    }

    pub fn with_hyphen_rate(mut self, range: ParamRange) -> Self {
        self.hyphen_rate = range;
        self
    }

    pub fn with_length(mut self, range: ParamRange) -> Self {
        self.length = range;
        self
    }

    pub fn with_boost(mut self, range: ParamRange) -> Self {
        self.boost = range;
        self
    }

    /// Validates every range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.structure_weight
            .validate("structure_weight", 0.0, f64::MAX)?;
        self.apostrophe_rate.validate("apostrophe_rate", 0.0, 1.0)?;
        self.hyphen_rate.validate("hyphen_rate", 0.0, 1.0)?;
        self.length
            .validate("length", 1.0, f64::from(u32::MAX))?;
        if self.length.min.fract() != 0.0 || self.length.max.fract() != 0.0 {
            return Err(ConfigError::BoundsOutOfDomain {
                parameter: "length",
                min: self.length.min,
                max: self.length.max,
                lower: 1.0,
                upper: f64::from(u32::MAX),
            });
        }
        self.boost.validate("boost", 0.0, f64::MAX)?;
        Ok(())
    }
}

/// Perturbation magnitude for each parameter class.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSizes {
    /// Structure weights and boosts.
    pub weights: f64,
    pub apostrophe_rate: f64,
    pub hyphen_rate: f64,
    /// Syllable count offsets; decoded values are rounded.
    pub length_range: f64,
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            weights: 0.1,
            apostrophe_rate: 0.05,
            hyphen_rate: 0.05,
            length_range: 1.0,
        }
    }
}

impl StepSizes {
    pub fn with_weights(mut self, step: f64) -> Self {
        self.weights = step;
        self
    }

    pub fn with_apostrophe_rate(mut self, step: f64) -> Self {
        self.apostrophe_rate = step;
        self
    }

    pub fn with_hyphen_rate(mut self, step: f64) -> Self {
        self.hyphen_rate = step;
        self
    }

    pub fn with_length_range(mut self, step: f64) -> Self {
        self.length_range = step;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("weights", self.weights),
            ("apostrophe_rate", self.apostrophe_rate),
            ("hyphen_rate", self.hyphen_rate),
            ("length_range", self.length_range),
        ];
        for (name, step) in checks {
            if !step.is_finite() || step < 0.0 {
                return Err(ConfigError::InvalidStepSize(name));
            }
        }
        Ok(())
    }
}
