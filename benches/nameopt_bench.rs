//! Criterion benchmarks for u-nameopt.
//!
//! Uses a small template-driven generator so the numbers reflect engine
//! overhead (sampling, scoring, search bookkeeping) rather than any real
//! generator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_nameopt::domain::{
    LengthRange, Morphology, NameGenerator, NamingDomainConfig, Phonology, Style,
};
use u_nameopt::error::GenerationError;
use u_nameopt::fitness::{metrics, FitnessEvaluator, FitnessWeights, ValidationSettings};
use u_nameopt::hc::HillClimbRunner;
use u_nameopt::sa::AnnealingRunner;
use u_nameopt::search::{OptimizationSettings, TuningProblem};
use u_numflow::random::create_rng;

// ===========================================================================
// Seeded syllable generator
// ===========================================================================

struct SyllableGenerator;

impl NameGenerator for SyllableGenerator {
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
        let lo = phon.length_range.min.min(phon.length_range.max);
        let hi = phon.length_range.max.max(lo);
        let names = (0..count)
            .map(|_| {
                let syllables = rng.random_range(lo..=hi);
                let mut name = String::new();
                for _ in 0..syllables {
                    name.push_str(&phon.consonants[rng.random_range(0..phon.consonants.len())]);
                    name.push_str(&phon.vowels[rng.random_range(0..phon.vowels.len())]);
                }
                name
            })
            .collect();
        Ok(names)
    }
}

fn domain(id: &str) -> NamingDomainConfig {
    let s = |items: &[&str]| items.iter().map(|x| x.to_string()).collect::<Vec<_>>();
    NamingDomainConfig::new(id)
        .with_phonology(Phonology {
            consonants: s(&["k", "t", "r", "s", "n", "l", "v", "m"]),
            vowels: s(&["a", "e", "i", "o", "u"]),
            syllable_templates: s(&["CV"]),
            length_range: LengthRange::new(2, 4),
            ..Phonology::default()
        })
        .with_morphology(Morphology {
            structures: s(&["root", "root-suffix"]),
            structure_weights: vec![0.7, 0.3],
            ..Morphology::default()
        })
        .with_style(Style {
            apostrophe_rate: 0.05,
            ..Style::default()
        })
}

fn problem(sample: usize) -> TuningProblem<SyllableGenerator> {
    let evaluator = FitnessEvaluator::new(
        SyllableGenerator,
        ValidationSettings::default()
            .with_required_names(sample)
            .with_sample_factor(1),
        FitnessWeights::default(),
    )
    .unwrap();
    TuningProblem::new(domain("bench"), evaluator)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_diffuseness(c: &mut Criterion) {
    let mut group = c.benchmark_group("diffuseness");
    group.sample_size(10);

    for &n in &[50usize, 200, 500] {
        let names = SyllableGenerator.generate(&domain("d"), 42, n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &names, |b, names| {
            b.iter(|| black_box(metrics::diffuseness(black_box(names), 0.3, 0.2)))
        });
    }
    group.finish();
}

fn bench_hill_climb(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climb");
    group.sample_size(10);

    for &n in &[50usize, 200] {
        let p = problem(n);
        let settings = OptimizationSettings::default()
            .with_iterations(20)
            .with_convergence(0.0, 0)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(p, settings), |b, (p, s)| {
            b.iter(|| black_box(HillClimbRunner::run(black_box(p), black_box(s))))
        });
    }
    group.finish();
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("annealing");
    group.sample_size(10);

    for &n in &[50usize, 200] {
        let p = problem(n);
        let settings = OptimizationSettings::default()
            .with_iterations(20)
            .with_convergence(0.0, 0)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(p, settings), |b, (p, s)| {
            b.iter(|| black_box(AnnealingRunner::run(black_box(p), black_box(s))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_diffuseness, bench_hill_climb, bench_annealing);
criterion_main!(benches);
