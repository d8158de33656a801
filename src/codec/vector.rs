//! Encoding, decoding and perturbation of parameter vectors.

use rand::Rng;

use super::bounds::{ParameterBounds, StepSizes};
use super::layout::{ParamKind, ParameterLayout};
use crate::domain::{LengthRange, NamingDomainConfig};
use crate::error::{CodecError, ConfigError};

/// Converts naming domains to and from flat parameter vectors.
///
/// # Examples
///
/// ```
/// use u_nameopt::codec::{ParameterBounds, ParameterCodec};
/// use u_nameopt::domain::NamingDomainConfig;
///
/// let mut domain = NamingDomainConfig::new("elvish");
/// domain.morphology.structure_weights = vec![0.6, 0.4];
/// domain.style.apostrophe_rate = 0.1;
///
/// let theta = ParameterCodec::encode(&domain);
/// assert_eq!(theta.len(), 8);
///
/// let decoded = ParameterCodec::decode(&theta, &domain, &ParameterBounds::default()).unwrap();
/// assert_eq!(decoded, domain);
/// ```
pub struct ParameterCodec;

impl ParameterCodec {
    /// Extracts the tunable fields in [`ParameterLayout`] order.
    pub fn encode(domain: &NamingDomainConfig) -> Vec<f64> {
        let layout = ParameterLayout::of(domain);
        layout
            .slots()
            .iter()
            .map(|&kind| read_slot(domain, kind))
            .collect()
    }

    /// Rebuilds a domain from `theta`, clamping every value to `bounds`.
    ///
    /// Non-tunable fields come from `template` unchanged. Length bounds are
    /// rounded to whole syllables and swapped when inverted. Invalid bounds
    /// and a vector of the wrong length are errors.
    pub fn decode(
        theta: &[f64],
        template: &NamingDomainConfig,
        bounds: &ParameterBounds,
    ) -> Result<NamingDomainConfig, ConfigError> {
        bounds.validate()?;
        let layout = ParameterLayout::of(template);
        if theta.len() != layout.len() {
            return Err(CodecError::DimensionMismatch {
                expected: layout.len(),
                actual: theta.len(),
            }
            .into());
        }

        let mut domain = template.clone();
        let mut length_min = f64::from(template.phonology.length_range.min);
        let mut length_max = f64::from(template.phonology.length_range.max);

        for (&kind, &raw) in layout.slots().iter().zip(theta) {
            let value = kind.range(bounds).clamp(raw);
            match kind {
                ParamKind::StructureWeight(i) => domain.morphology.structure_weights[i] = value,
                ParamKind::ApostropheRate => domain.style.apostrophe_rate = value,
                ParamKind::HyphenRate => domain.style.hyphen_rate = value,
                ParamKind::LengthMin => length_min = value,
                ParamKind::LengthMax => length_max = value,
                ParamKind::FavoredClusterBoost => domain.phonology.favored_cluster_boost = value,
                ParamKind::PreferredEndingBoost => domain.style.preferred_ending_boost = value,
            }
        }

        domain.phonology.length_range = decode_length(length_min, length_max);
        Ok(domain)
    }

    /// Adds an independent offset `(2u - 1) * step` to every entry.
    ///
    /// `u` is drawn uniformly from `[0, 1)` using `rng`, one draw per slot
    /// in layout order. Entries beyond the layout are copied unchanged.
    /// The result is not clamped; [`decode`](Self::decode) does that.
    pub fn perturb<R: Rng>(
        theta: &[f64],
        layout: &ParameterLayout,
        steps: &StepSizes,
        rng: &mut R,
    ) -> Vec<f64> {
        theta
            .iter()
            .enumerate()
            .map(|(i, &value)| match layout.kind(i) {
                Some(kind) => {
                    let step = kind.step_class().step(steps);
                    let u: f64 = rng.random();
                    value + (2.0 * u - 1.0) * step
                }
                None => value,
            })
            .collect()
    }

    /// Euclidean distance over the common prefix of `a` and `b`.
    pub fn distance(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "parameter vectors differ in length");
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt()
    }
}

fn read_slot(domain: &NamingDomainConfig, kind: ParamKind) -> f64 {
    match kind {
        ParamKind::StructureWeight(i) => domain.morphology.structure_weights[i],
        ParamKind::ApostropheRate => domain.style.apostrophe_rate,
        ParamKind::HyphenRate => domain.style.hyphen_rate,
        ParamKind::LengthMin => f64::from(domain.phonology.length_range.min),
        ParamKind::LengthMax => f64::from(domain.phonology.length_range.max),
        ParamKind::FavoredClusterBoost => domain.phonology.favored_cluster_boost,
        ParamKind::PreferredEndingBoost => domain.style.preferred_ending_boost,
    }
}

// Inputs are already clamped to validated, integral, positive bounds.
fn decode_length(min: f64, max: f64) -> LengthRange {
    let a = min.round() as u32;
    let b = max.round() as u32;
    if a <= b {
        LengthRange::new(a, b)
    } else {
        LengthRange::new(b, a)
    }
}
