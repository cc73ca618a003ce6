//! Criterion benchmarks for edge-pair classification.
//! Kinds: crossing, tee, extension, skew (seeded pairs from `rand3`).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p autovtx

use autovtx::api::{classify_edge_pair, EdgePairKind, PairCfg, PairSampler};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let kinds = [
        ("crossing", EdgePairKind::Crossing),
        ("tee", EdgePairKind::Tee),
        ("extension", EdgePairKind::Extension),
        ("skew", EdgePairKind::Skew),
    ];
    for (name, kind) in kinds {
        group.bench_with_input(BenchmarkId::new("edge_pair", name), &kind, |b, &kind| {
            let mut sampler = PairSampler::new(PairCfg::default(), 43);
            b.iter_batched(
                || sampler.next_pair(kind).pair,
                |pair| {
                    let _res = classify_edge_pair(&pair.first, &pair.second);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let mut sampler = PairSampler::new(PairCfg::default(), 44);
    let pairs: Vec<_> = (0..256)
        .map(|i| {
            let kind = match i % 3 {
                0 => EdgePairKind::Crossing,
                1 => EdgePairKind::Tee,
                _ => EdgePairKind::Extension,
            };
            sampler.next_pair(kind).pair
        })
        .collect();
    c.bench_function("classify_and_plan_256", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter_map(|pair| pair.classify().ok().and_then(|r| pair.plan(&r)))
                .count()
        })
    });
}

criterion_group!(benches, bench_classify, bench_plan);
criterion_main!(benches);
