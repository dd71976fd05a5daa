//! Performance benchmarks for key estimation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stratum_tonal::{estimate_key, ChromaVector, Genre, KeyEstimator};

fn bench_estimate_key(c: &mut Criterion) {
    let chroma = [0.9, 0.1, 0.5, 0.1, 0.7, 0.6, 0.1, 0.8, 0.1, 0.5, 0.1, 0.3];

    c.bench_function("estimate_key_single", |b| {
        b.iter(|| estimate_key(black_box("classical"), black_box(&chroma)));
    });
}

fn bench_estimate_batch(c: &mut Criterion) {
    // One vector per transposition of every template, 192 in total
    let chromas: Vec<ChromaVector> = Genre::ALL
        .iter()
        .flat_map(|g| [g.profile().major(), g.profile().minor()])
        .flat_map(|t| (0..12).map(move |r| t.rotated(r)))
        .filter_map(|bins| ChromaVector::new(bins).ok())
        .collect();

    let estimator = KeyEstimator::new(Genre::General);

    c.bench_function("estimate_batch_192", |b| {
        b.iter(|| estimator.estimate_batch(black_box(&chromas)));
    });
}

criterion_group!(benches, bench_estimate_key, bench_estimate_batch);
criterion_main!(benches);
