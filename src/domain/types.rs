//! Naming domain data model.

/// Inclusive name length range, measured in syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthRange {
    pub min: u32,
    pub max: u32,
}

impl LengthRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self { min: 2, max: 3 }
    }
}

/// Sound inventory and syllable rules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phonology {
    pub consonants: Vec<String>,
    pub vowels: Vec<String>,
    /// Syllable templates such as `"CV"` or `"CVC"`.
    pub syllable_templates: Vec<String>,
    pub length_range: LengthRange,
    pub favored_clusters: Vec<String>,
    pub forbidden_clusters: Vec<String>,
    /// Multiplier applied to favored clusters by the generator.
    pub favored_cluster_boost: f64,
}

impl Default for Phonology {
    fn default() -> Self {
        Self {
            consonants: Vec::new(),
            vowels: Vec::new(),
            syllable_templates: vec!["CV".into()],
            length_range: LengthRange::default(),
            favored_clusters: Vec::new(),
            forbidden_clusters: Vec::new(),
            favored_cluster_boost: 1.0,
        }
    }
}

/// Affix lists and word-structure choices.
///
/// `structure_weights` is parallel to `structures`. Weights need not sum
/// to one; the generator renormalizes them.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Morphology {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    /// Structure choices such as `"root"`, `"prefix-root"`, `"root-suffix"`.
    pub structures: Vec<String>,
    pub structure_weights: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capitalization {
    #[default]
    Title,
    Lower,
    Upper,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RhythmBias {
    #[default]
    Neutral,
    Flowing,
    Staccato,
}

/// Surface styling applied after morphology.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub capitalization: Capitalization,
    /// Probability of inserting an apostrophe, in [0, 1].
    pub apostrophe_rate: f64,
    /// Probability of inserting a hyphen, in [0, 1].
    pub hyphen_rate: f64,
    pub preferred_endings: Vec<String>,
    pub preferred_ending_boost: f64,
    pub rhythm_bias: RhythmBias,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            capitalization: Capitalization::default(),
            apostrophe_rate: 0.0,
            hyphen_rate: 0.0,
            preferred_endings: Vec::new(),
            preferred_ending_boost: 1.0,
            rhythm_bias: RhythmBias::default(),
        }
    }
}

/// A named cultural naming rule set.
///
/// The tuning engine reads this through
/// [`ParameterCodec::encode`](crate::codec::ParameterCodec::encode) and
/// produces new instances through
/// [`ParameterCodec::decode`](crate::codec::ParameterCodec::decode); it never
/// mutates a caller's value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamingDomainConfig {
    pub id: String,
    pub phonology: Phonology,
    pub morphology: Morphology,
    pub style: Style,
}

impl NamingDomainConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_phonology(mut self, phonology: Phonology) -> Self {
        self.phonology = phonology;
        self
    }

    pub fn with_morphology(mut self, morphology: Morphology) -> Self {
        self.morphology = morphology;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}
