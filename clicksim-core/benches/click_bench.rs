//! Criterion benchmarks for click-model hot paths.
//!
//! Benchmarks:
//! 1. Primitive models on a single slate
//! 2. A nested policy (probabilistic choice over a capped, combined model)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use clicksim_core::{
    ClickModel, Combiner, ConditionedClickModel, Documents, MaxClicksModel, MultipleClickModel,
    OnlyRelevantClickModel, RandomClickModel,
};

fn make_relevance(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 7) % 5) as f64).collect()
}

fn nested_policy() -> Box<dyn ClickModel> {
    let noisy_relevant = ConditionedClickModel::new(
        vec![
            Box::new(OnlyRelevantClickModel::new(3.0)),
            Box::new(RandomClickModel::new(2)),
        ],
        Combiner::Any,
    )
    .unwrap();
    Box::new(
        MultipleClickModel::new(
            vec![
                Box::new(MaxClicksModel::new(Box::new(noisy_relevant), Some(3))),
                Box::new(RandomClickModel::new(1)),
            ],
            vec![0.9, 0.1],
        )
        .unwrap(),
    )
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");
    for n in [10usize, 100, 1000] {
        let relevance = make_relevance(n);
        let docs = Documents::from_relevance(&relevance);
        let mut rng = StdRng::seed_from_u64(42);

        let random = RandomClickModel::new(n / 10);
        group.bench_with_input(BenchmarkId::new("random", n), &docs, |b, docs| {
            b.iter(|| random.click(black_box(docs), &mut rng).unwrap())
        });

        let relevant = OnlyRelevantClickModel::new(2.0);
        group.bench_with_input(BenchmarkId::new("only_relevant", n), &docs, |b, docs| {
            b.iter(|| relevant.click(black_box(docs), &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let model = nested_policy();
    let relevance = make_relevance(50);
    let docs = Documents::from_relevance(&relevance);
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("nested_policy_50_docs", |b| {
        b.iter(|| model.click(black_box(&docs), &mut rng).unwrap())
    });
}

criterion_group!(benches, bench_primitives, bench_nested);
criterion_main!(benches);
