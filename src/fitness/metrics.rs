//! Sub-score computations over a sample of names.
//!
//! All scores are in `[0, 1]`, higher is better:
//!
//! - **capacity**: mean of the distinct-name ratio and the normalized
//!   Shannon entropy of name shapes.
//! - **diffuseness**: 5th-percentile nearest-neighbor edit distance,
//!   relative to a target, averaged over raw names and shapes.
//! - **separation**: distance from this sample's feature centroid to the
//!   closest other domain's centroid, relative to a target.

use std::collections::{BTreeMap, HashSet};

use crate::codec::ParameterCodec;

/// Length of a phonetic feature vector.
pub const FEATURES: usize = 30;

const LETTERS: usize = 26;
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];
const LENGTH_SCALE: f64 = 12.0;

/// Consonant/vowel skeleton of a name.
///
/// Letters map to `C` or `V`; apostrophes, hyphens and spaces are kept;
/// anything else is dropped.
///
/// ```
/// use u_nameopt::fitness::metrics::shape_of;
///
/// assert_eq!(shape_of("Ka'thel"), "CV'CCVC");
/// ```
pub fn shape_of(name: &str) -> String {
    name.chars()
        .filter_map(|c| {
            if c.is_alphabetic() {
                let lower = c.to_lowercase().next().unwrap_or(c);
                Some(if VOWELS.contains(&lower) { 'V' } else { 'C' })
            } else if matches!(c, '\'' | '-' | ' ') {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}

/// Levenshtein distance divided by the longer length (in chars); in `[0, 1]`.
///
/// Two empty strings are at distance zero.
pub fn normalized_edit_distance(a: &str, b: &str) -> f64 {
    (1.0 - strsim::normalized_levenshtein(a, b)).clamp(0.0, 1.0)
}

/// Distance from each item to its nearest other item.
///
/// Duplicates are distinct items at distance zero. Returns an empty vector
/// for fewer than two items.
pub fn nearest_neighbor_distances(items: &[String]) -> Vec<f64> {
    let n = items.len();
    if n < 2 {
        return Vec::new();
    }
    let mut nearest = vec![f64::INFINITY; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = normalized_edit_distance(&items[i], &items[j]);
            if d < nearest[i] {
                nearest[i] = d;
            }
            if d < nearest[j] {
                nearest[j] = d;
            }
        }
    }
    nearest
}

/// Linearly interpolated percentile, `p` in `[0, 100]`.
///
/// NaN entries are ignored; `None` when nothing remains.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// `value / threshold` clamped to `[0, 1]`; a non-positive threshold
/// always scores 1.
pub fn threshold_score(value: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 {
        return 1.0;
    }
    let score = value / threshold;
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Shannon entropy of the shape distribution, divided by `ln(n)`.
///
/// Terms are summed in shape order so equal inputs give bit-identical
/// results.
pub fn shape_entropy(shapes: &[String]) -> f64 {
    let n = shapes.len();
    if n < 2 {
        return 0.0;
    }
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for shape in shapes {
        *counts.entry(shape.as_str()).or_default() += 1;
    }
    let total = n as f64;
    let entropy: f64 = counts
        .values()
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.ln()
        })
        .sum();
    (entropy / total.ln()).clamp(0.0, 1.0)
}

/// Output variety: distinct ratio and shape entropy, averaged.
pub fn capacity(names: &[String]) -> f64 {
    if names.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&str> = names.iter().map(String::as_str).collect();
    let distinct_ratio = distinct.len() as f64 / names.len() as f64;
    if names.len() == 1 {
        return distinct_ratio;
    }
    let shapes: Vec<String> = names.iter().map(|n| shape_of(n)).collect();
    (0.5 * distinct_ratio + 0.5 * shape_entropy(&shapes)).clamp(0.0, 1.0)
}

/// Spread of the sample relative to `min_nn_p5` and `min_shape_nn_p5`.
///
/// A single name has no neighbors and scores 1.
pub fn diffuseness(names: &[String], min_nn_p5: f64, min_shape_nn_p5: f64) -> f64 {
    match names.len() {
        0 => return 0.0,
        1 => return 1.0,
        _ => {}
    }
    let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
    let shapes: Vec<String> = names.iter().map(|n| shape_of(n)).collect();

    let name_p5 = percentile(&nearest_neighbor_distances(&lowered), 5.0).unwrap_or(0.0);
    let shape_p5 = percentile(&nearest_neighbor_distances(&shapes), 5.0).unwrap_or(0.0);

    0.5 * threshold_score(name_p5, min_nn_p5) + 0.5 * threshold_score(shape_p5, min_shape_nn_p5)
}

/// Phonetic feature vector of one name.
///
/// Layout: 26 letter frequencies (share of letters), vowel ratio, length
/// scaled by 12 letters (capped at 1), apostrophe flag, hyphen flag.
pub fn embed(name: &str) -> [f64; FEATURES] {
    let mut features = [0.0; FEATURES];
    let mut letters = 0usize;
    let mut vowels = 0usize;
    for c in name.chars() {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            features[(lower as u8 - b'a') as usize] += 1.0;
            letters += 1;
            if VOWELS.contains(&lower) {
                vowels += 1;
            }
        } else if c.is_alphabetic() {
            letters += 1;
        }
        match c {
            '\'' => features[LETTERS + 2] = 1.0,
            '-' => features[LETTERS + 3] = 1.0,
            _ => {}
        }
    }
    if letters > 0 {
        let total = letters as f64;
        for f in &mut features[..LETTERS] {
            *f /= total;
        }
        features[LETTERS] = vowels as f64 / total;
        features[LETTERS + 1] = (total / LENGTH_SCALE).min(1.0);
    }
    features
}

/// Mean feature vector of a sample; `None` for an empty sample.
pub fn centroid(names: &[String]) -> Option<Vec<f64>> {
    if names.is_empty() {
        return None;
    }
    let mut sum = vec![0.0; FEATURES];
    for name in names {
        for (acc, f) in sum.iter_mut().zip(embed(name)) {
            *acc += f;
        }
    }
    let n = names.len() as f64;
    sum.iter_mut().for_each(|v| *v /= n);
    Some(sum)
}

/// Distinguishability from the closest of `others`.
///
/// With no other centroids the score is neutral (1.0).
pub fn separation<'a, I>(centroid: &[f64], others: I, min_centroid_distance: f64) -> f64
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let closest = others
        .into_iter()
        .map(|other| ParameterCodec::distance(centroid, other))
        .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.min(d))));
    match closest {
        Some(d) => threshold_score(d, min_centroid_distance),
        None => 1.0,
    }
}
