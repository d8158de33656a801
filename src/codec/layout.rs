//! Slot layout of a parameter vector.

use super::bounds::{ParamRange, ParameterBounds, StepSizes};
use crate::domain::NamingDomainConfig;

/// Which domain field a vector slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// `morphology.structure_weights[i]`.
    StructureWeight(usize),
    ApostropheRate,
    HyphenRate,
    LengthMin,
    LengthMax,
    FavoredClusterBoost,
    PreferredEndingBoost,
}

/// Perturbation class, selecting a [`StepSizes`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepClass {
    Weights,
    ApostropheRate,
    HyphenRate,
    LengthRange,
}

impl ParamKind {
    pub fn step_class(self) -> StepClass {
        match self {
            ParamKind::StructureWeight(_)
            | ParamKind::FavoredClusterBoost
            | ParamKind::PreferredEndingBoost => StepClass::Weights,
            ParamKind::ApostropheRate => StepClass::ApostropheRate,
            ParamKind::HyphenRate => StepClass::HyphenRate,
            ParamKind::LengthMin | ParamKind::LengthMax => StepClass::LengthRange,
        }
    }

    /// Field name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ParamKind::StructureWeight(_) => "structure_weight",
            ParamKind::ApostropheRate => "apostrophe_rate",
            ParamKind::HyphenRate => "hyphen_rate",
            ParamKind::LengthMin => "length_min",
            ParamKind::LengthMax => "length_max",
            ParamKind::FavoredClusterBoost => "favored_cluster_boost",
            ParamKind::PreferredEndingBoost => "preferred_ending_boost",
        }
    }

    pub fn range(self, bounds: &ParameterBounds) -> ParamRange {
        match self {
            ParamKind::StructureWeight(_) => bounds.structure_weight,
            ParamKind::ApostropheRate => bounds.apostrophe_rate,
            ParamKind::HyphenRate => bounds.hyphen_rate,
            ParamKind::LengthMin | ParamKind::LengthMax => bounds.length,
            ParamKind::FavoredClusterBoost | ParamKind::PreferredEndingBoost => bounds.boost,
        }
    }
}

impl StepClass {
    pub fn step(self, steps: &StepSizes) -> f64 {
        match self {
            StepClass::Weights => steps.weights,
            StepClass::ApostropheRate => steps.apostrophe_rate,
            StepClass::HyphenRate => steps.hyphen_rate,
            StepClass::LengthRange => steps.length_range,
        }
    }
}

/// Ordered slot kinds for one domain shape.
///
/// Order: structure weights, apostrophe rate, hyphen rate, length min,
/// length max, favored-cluster boost, preferred-ending boost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterLayout {
    slots: Vec<ParamKind>,
}

impl ParameterLayout {
    /// Number of slots that follow the structure weights.
    pub const SCALAR_SLOTS: usize = 6;

    pub fn of(domain: &NamingDomainConfig) -> Self {
        let weights = domain.morphology.structure_weights.len();
        let mut slots = Vec::with_capacity(weights + Self::SCALAR_SLOTS);
        slots.extend((0..weights).map(ParamKind::StructureWeight));
        slots.extend([
            ParamKind::ApostropheRate,
            ParamKind::HyphenRate,
            ParamKind::LengthMin,
            ParamKind::LengthMax,
            ParamKind::FavoredClusterBoost,
            ParamKind::PreferredEndingBoost,
        ]);
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[ParamKind] {
        &self.slots
    }

    pub fn kind(&self, index: usize) -> Option<ParamKind> {
        self.slots.get(index).copied()
    }
}
