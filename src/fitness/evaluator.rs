//! Sample-based fitness evaluation.

use super::config::{FitnessWeights, ValidationSettings};
use super::metrics;
use crate::domain::{NameGenerator, NamingDomainConfig};
use crate::error::ConfigError;
use crate::seed::derive_seed;

/// Sub-scores of one evaluation, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    pub capacity: f64,
    pub diffuseness: f64,
    pub separation: f64,
}

impl Scores {
    pub const ZERO: Scores = Scores {
        capacity: 0.0,
        diffuseness: 0.0,
        separation: 0.0,
    };

    /// Weighted mean over the active weights.
    pub fn combine(&self, weights: &FitnessWeights) -> f64 {
        let total = weights.active_total();
        if total <= 0.0 {
            return 0.0;
        }
        (weights.capacity * self.capacity
            + weights.diffuseness * self.diffuseness
            + weights.separation * self.separation)
            / total
    }
}

/// One evaluated candidate. Never mutated once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationResult {
    pub config: NamingDomainConfig,
    pub theta: Vec<f64>,
    pub scores: Scores,
    pub fitness: f64,
    pub iteration: usize,
}

impl EvaluationResult {
    /// Fitness with NaN mapped to negative infinity, for comparisons.
    pub fn comparable_fitness(&self) -> f64 {
        comparable(self.fitness)
    }

    /// Strictly better than `other`; NaN is never better than anything.
    pub fn improves_on(&self, other: &EvaluationResult) -> bool {
        self.comparable_fitness() > other.comparable_fitness()
    }
}

/// NaN sorts below every real fitness.
pub fn comparable(fitness: f64) -> f64 {
    if fitness.is_nan() {
        f64::NEG_INFINITY
    } else {
        fitness
    }
}

/// Names generated by another domain, used for separation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceSample {
    pub domain_id: String,
    pub names: Vec<String>,
}

impl ReferenceSample {
    pub fn new(domain_id: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            domain_id: domain_id.into(),
            names,
        }
    }
}

#[derive(Debug, Clone)]
struct ReferenceCentroid {
    domain_id: String,
    centroid: Vec<f64>,
}

/// Scores candidate domains by sampling a [`NameGenerator`].
///
/// # Examples
///
/// ```
/// use u_nameopt::domain::{NameGenerator, NamingDomainConfig};
/// use u_nameopt::error::GenerationError;
/// use u_nameopt::fitness::{FitnessEvaluator, FitnessWeights, ValidationSettings};
///
/// struct Numbered;
/// impl NameGenerator for Numbered {
///     fn generate(&self, _: &NamingDomainConfig, seed: u64, count: usize)
///         -> Result<Vec<String>, GenerationError> {
///         Ok((0..count).map(|i| format!("n{}", seed as usize % 97 + i)).collect())
///     }
/// }
///
/// let evaluator = FitnessEvaluator::new(
///     Numbered,
///     ValidationSettings::default().with_required_names(10).with_sample_factor(1),
///     FitnessWeights::default(),
/// )
/// .unwrap();
/// let domain = NamingDomainConfig::new("demo");
/// let result = evaluator.evaluate(&domain, &[], 0);
/// assert!((0.0..=1.0).contains(&result.fitness));
/// ```
pub struct FitnessEvaluator<G> {
    generator: G,
    validation: ValidationSettings,
    weights: FitnessWeights,
    references: Vec<ReferenceCentroid>,
}

impl<G: NameGenerator> FitnessEvaluator<G> {
    /// Validates the settings and builds an evaluator with no references.
    pub fn new(
        generator: G,
        validation: ValidationSettings,
        weights: FitnessWeights,
    ) -> Result<Self, ConfigError> {
        validation.validate()?;
        weights.validate()?;
        if weights.style > 0.0 {
            log::debug!(
                "style weight {} ignored: no style scorer attached",
                weights.style
            );
        }
        Ok(Self {
            generator,
            validation,
            weights,
            references: Vec::new(),
        })
    }

    /// Adds other domains' samples for the separation score.
    ///
    /// Empty samples are skipped.
    pub fn with_references(mut self, samples: impl IntoIterator<Item = ReferenceSample>) -> Self {
        for sample in samples {
            match metrics::centroid(&sample.names) {
                Some(centroid) => self.references.push(ReferenceCentroid {
                    domain_id: sample.domain_id,
                    centroid,
                }),
                None => log::warn!(
                    "reference sample for '{}' is empty; ignoring",
                    sample.domain_id
                ),
            }
        }
        self
    }

    pub fn validation(&self) -> &ValidationSettings {
        &self.validation
    }

    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    /// Samples `domain` and scores the result.
    ///
    /// Generator failures and empty samples score zero on every axis; they
    /// are logged, never returned.
    pub fn evaluate(
        &self,
        domain: &NamingDomainConfig,
        theta: &[f64],
        iteration: usize,
    ) -> EvaluationResult {
        let count = self.validation.sample_size();
        let seed = derive_seed(&domain.id, iteration);

        let scores = match self.generator.generate(domain, seed, count) {
            Ok(names) if names.is_empty() => {
                log::warn!(
                    "domain '{}' produced no names at iteration {iteration}",
                    domain.id
                );
                Scores::ZERO
            }
            Ok(mut names) => {
                names.truncate(count);
                self.score(&domain.id, &names)
            }
            Err(err) => {
                log::warn!("domain '{}' at iteration {iteration}: {err}", domain.id);
                Scores::ZERO
            }
        };

        EvaluationResult {
            config: domain.clone(),
            theta: theta.to_vec(),
            scores,
            fitness: scores.combine(&self.weights),
            iteration,
        }
    }

    fn score(&self, domain_id: &str, names: &[String]) -> Scores {
        let capacity = metrics::capacity(names);
        let diffuseness = metrics::diffuseness(
            names,
            self.validation.min_nn_p5,
            self.validation.min_shape_nn_p5,
        );
        let separation = match metrics::centroid(names) {
            Some(centroid) => metrics::separation(
                &centroid,
                self.references
                    .iter()
                    .filter(|r| r.domain_id != domain_id)
                    .map(|r| r.centroid.as_slice()),
                self.validation.min_centroid_distance,
            ),
            None => 0.0,
        };
        Scores {
            capacity: sanitize(capacity),
            diffuseness: sanitize(diffuseness),
            separation: sanitize(separation),
        }
    }
}

fn sanitize(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}
