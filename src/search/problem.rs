//! The tuning problem handed to a search strategy.

use crate::codec::{ParameterBounds, ParameterCodec, ParameterLayout};
use crate::domain::{NameGenerator, NamingDomainConfig};
use crate::error::ConfigError;
use crate::fitness::FitnessEvaluator;

/// An initial domain, the evaluator that scores its variants, and the
/// bounds candidates are clamped to.
///
/// The initial domain doubles as the decode template: every candidate
/// inherits its inventories, affixes and templates.
pub struct TuningProblem<G> {
    initial: NamingDomainConfig,
    evaluator: FitnessEvaluator<G>,
    bounds: ParameterBounds,
}

impl<G: NameGenerator> TuningProblem<G> {
    pub fn new(initial: NamingDomainConfig, evaluator: FitnessEvaluator<G>) -> Self {
        Self {
            initial,
            evaluator,
            bounds: ParameterBounds::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: ParameterBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn initial(&self) -> &NamingDomainConfig {
        &self.initial
    }

    pub fn evaluator(&self) -> &FitnessEvaluator<G> {
        &self.evaluator
    }

    pub fn bounds(&self) -> &ParameterBounds {
        &self.bounds
    }

    /// Checks the bounds, and that the initial domain's tunables are finite
    /// and already inside them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        let morph = &self.initial.morphology;
        if morph.structure_weights.len() != morph.structures.len() {
            return Err(ConfigError::InvalidSettings(format!(
                "domain '{}' has {} structures but {} structure weights",
                self.initial.id,
                morph.structures.len(),
                morph.structure_weights.len()
            )));
        }

        let length = self.initial.phonology.length_range;
        if length.min > length.max {
            return Err(ConfigError::InvertedLengthRange {
                min: length.min,
                max: length.max,
            });
        }
        let layout = ParameterLayout::of(&self.initial);
        let theta = ParameterCodec::encode(&self.initial);
        for (&kind, &value) in layout.slots().iter().zip(&theta) {
            let range = kind.range(&self.bounds);
            if !range.contains(value) {
                return Err(ConfigError::InitialOutOfBounds {
                    parameter: kind.name(),
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}
