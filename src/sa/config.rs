//! Annealing temperature schedule.

use crate::error::ConfigError;

/// Geometric cooling schedule for simulated annealing.
///
/// `T_0 = initial_temperature`, and after every iteration
/// `T_{k+1} = cooling_rate * T_k`, whether or not the move was accepted.
///
/// # Examples
///
/// ```
/// use u_nameopt::sa::AnnealingSettings;
///
/// let schedule = AnnealingSettings::default()
///     .with_initial_temperature(2.0)
///     .with_cooling_rate(0.9);
/// assert!(schedule.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingSettings {
    /// Initial temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Cooling factor in (0, 1]. Typical: 0.9–0.99.
    pub cooling_rate: f64,

    /// Below this temperature every non-improving move is rejected.
    pub temperature_floor: f64,
}

impl Default for AnnealingSettings {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            cooling_rate: 0.95,
            temperature_floor: 1e-12,
        }
    }
}

impl AnnealingSettings {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_temperature_floor(mut self, floor: f64) -> Self {
        self.temperature_floor = floor;
        self
    }

    /// Validates the schedule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature > 0.0) || !self.initial_temperature.is_finite() {
            return Err(ConfigError::InvalidSettings(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(ConfigError::InvalidSettings(format!(
                "cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            )));
        }
        if !(self.temperature_floor >= 0.0) || !self.temperature_floor.is_finite() {
            return Err(ConfigError::InvalidSettings(format!(
                "temperature_floor must be non-negative and finite, got {}",
                self.temperature_floor
            )));
        }
        Ok(())
    }
}
