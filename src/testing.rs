//! Test fixtures: a small syllable generator and sample domains.

use rand::Rng;
use u_numflow::random::create_rng;

use crate::domain::{
    Capitalization, LengthRange, Morphology, NameGenerator, NamingDomainConfig, Phonology,
    RhythmBias, Style,
};
use crate::error::GenerationError;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A domain with three structure weights (nine tunable slots).
pub(crate) fn sample_domain(id: &str) -> NamingDomainConfig {
    NamingDomainConfig::new(id)
        .with_phonology(Phonology {
            consonants: strings(&["k", "t", "r", "s", "n", "l", "v", "th"]),
            vowels: strings(&["a", "e", "i", "o", "u"]),
            syllable_templates: strings(&["CV", "CVC", "V"]),
            length_range: LengthRange::new(2, 4),
            favored_clusters: strings(&["th"]),
            forbidden_clusters: strings(&["tk"]),
            favored_cluster_boost: 1.5,
        })
        .with_morphology(Morphology {
            prefixes: strings(&["al", "ver"]),
            suffixes: strings(&["ion", "ar", "eth"]),
            structures: strings(&["root", "prefix-root", "root-suffix"]),
            structure_weights: vec![0.5, 0.25, 0.25],
        })
        .with_style(Style {
            capitalization: Capitalization::Title,
            apostrophe_rate: 0.05,
            hyphen_rate: 0.0,
            preferred_endings: strings(&["a", "ion"]),
            preferred_ending_boost: 1.2,
            rhythm_bias: RhythmBias::Flowing,
        })
}

/// Builds names from syllable templates; responds to every tunable field.
///
/// A favored cluster replaces a consonant with odds `boost : consonants`,
/// and a preferred ending is appended with probability `boost / (boost + 4)`.
pub(crate) struct ToyGenerator;

impl NameGenerator for ToyGenerator {
    fn generate(
        &self,
        domain: &NamingDomainConfig,
        seed: u64,
        count: usize,
    ) -> Result<Vec<String>, GenerationError> {
        let phon = &domain.phonology;
        if phon.consonants.is_empty() || phon.vowels.is_empty() {
            return Ok(Vec::new());
        }
        let mut rng = create_rng(seed);
        Ok((0..count).map(|_| toy_name(domain, &mut rng)).collect())
    }
}

fn pick<'a, R: Rng>(items: &'a [String], rng: &mut R) -> &'a str {
    if items.is_empty() {
        ""
    } else {
        &items[rng.random_range(0..items.len())]
    }
}

fn consonant<'a, R: Rng>(phon: &'a Phonology, rng: &mut R) -> &'a str {
    let boost = phon.favored_cluster_boost.max(0.0);
    let odds = boost / (boost + phon.consonants.len() as f64);
    if !phon.favored_clusters.is_empty() && rng.random::<f64>() < odds {
        pick(&phon.favored_clusters, rng)
    } else {
        pick(&phon.consonants, rng)
    }
}

fn toy_name<R: Rng>(domain: &NamingDomainConfig, rng: &mut R) -> String {
    let phon = &domain.phonology;
    let style = &domain.style;
    let lo = phon.length_range.min.min(phon.length_range.max);
    let hi = phon.length_range.max.max(lo);
    let syllables = rng.random_range(lo..=hi);

    let mut root = String::new();
    for s in 0..syllables {
        if s > 0 {
            if rng.random::<f64>() < style.apostrophe_rate {
                root.push('\'');
            } else if rng.random::<f64>() < style.hyphen_rate {
                root.push('-');
            }
        }
        for slot in pick(&phon.syllable_templates, rng).chars() {
            match slot {
                'C' => root.push_str(consonant(phon, rng)),
                'V' => root.push_str(pick(&phon.vowels, rng)),
                _ => {}
            }
        }
    }

    let morph = &domain.morphology;
    let total: f64 = morph.structure_weights.iter().sum();
    let mut structure = "root";
    if total > 0.0 {
        let mut target = rng.random::<f64>() * total;
        for (choice, &w) in morph.structures.iter().zip(&morph.structure_weights) {
            if target < w {
                structure = choice.as_str();
                break;
            }
            target -= w;
        }
    }
    let mut name = match structure {
        "prefix-root" => format!("{}{}", pick(&morph.prefixes, rng), root),
        "root-suffix" => format!("{}{}", root, pick(&morph.suffixes, rng)),
        _ => root,
    };

    if !style.preferred_endings.is_empty() {
        let boost = style.preferred_ending_boost.max(0.0);
        if rng.random::<f64>() < boost / (boost + 4.0) {
            name.push_str(pick(&style.preferred_endings, rng));
        }
    }

    if style.capitalization == Capitalization::Title {
        if let Some(first) = name.get(..1) {
            name = first.to_uppercase() + &name[1..];
        }
    }
    name
}

/// Always returns the same name.
pub(crate) struct ConstantGenerator(pub &'static str);

impl NameGenerator for ConstantGenerator {
    fn generate(
        &self,
        _domain: &NamingDomainConfig,
        _seed: u64,
        count: usize,
    ) -> Result<Vec<String>, GenerationError> {
        Ok(vec![self.0.to_string(); count])
    }
}

/// Always fails.
pub(crate) struct FailingGenerator;

impl NameGenerator for FailingGenerator {
    fn generate(
        &self,
        _domain: &NamingDomainConfig,
        _seed: u64,
        _count: usize,
    ) -> Result<Vec<String>, GenerationError> {
        Err(GenerationError::new("inventory exhausted"))
    }
}
