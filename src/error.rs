//! Error types shared across the crate.

/// Invalid configuration detected before a run starts.
///
/// Runners validate every setting up front; when one of these is
/// returned, no evaluation has been performed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bounds for {parameter}: min {min} > max {max}")]
    InvertedBounds {
        parameter: &'static str,
        min: f64,
        max: f64,
    },
    #[error("bounds for {parameter} must be finite, got [{min}, {max}]")]
    NonFiniteBounds {
        parameter: &'static str,
        min: f64,
        max: f64,
    },
    #[error("bounds for {parameter} must lie within [{lower}, {upper}], got [{min}, {max}]")]
    BoundsOutOfDomain {
        parameter: &'static str,
        min: f64,
        max: f64,
        lower: f64,
        upper: f64,
    },
    #[error("step size for {0} must be finite and non-negative")]
    InvalidStepSize(&'static str),
    #[error("fitness weight {name} must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("at least one of the capacity, diffuseness or separation weights must be positive")]
    ZeroWeights,
    #[error("invalid validation settings: {0}")]
    InvalidValidation(String),
    #[error("invalid optimization settings: {0}")]
    InvalidSettings(String),
    #[error("initial {parameter} = {value} lies outside [{min}, {max}]")]
    InitialOutOfBounds {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("initial length range is inverted: min {min} > max {max}")]
    InvertedLengthRange { min: u32, max: u32 },
    #[error("parameter vector cannot be decoded: {0}")]
    Codec(#[from] CodecError),
}

/// Errors raised while converting between a domain and its parameter vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    #[error("parameter vector has {actual} entries, template layout expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Failure reported by a [`NameGenerator`](crate::domain::NameGenerator).
///
/// The evaluator never propagates this; a failed sample scores zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("name generation failed: {0}")]
pub struct GenerationError(pub String);

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
