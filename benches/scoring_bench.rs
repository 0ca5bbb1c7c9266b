use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use impact_tracker::{MetricsCalculator, ProgramRecord};
use std::hint::black_box;

fn create_records(count: usize) -> Vec<ProgramRecord> {
    (0..count)
        .map(|i| {
            ProgramRecord::new(i as u64 + 1, format!("Program {}", i % 50), "2025-Q1")
                .with_beneficiaries(50 + (i % 400) as i64)
                .with_cost(1000.0 + (i % 97) as f64 * 120.0)
                .with_outcomes(30.0, 40.0 + (i % 60) as f64)
        })
        .collect()
}

fn bench_composite_score(c: &mut Criterion) {
    let calculator = MetricsCalculator::default();

    c.bench_function("composite_score", |b| {
        b.iter(|| {
            black_box(calculator.composite_score(
                black_box(25.0),
                black_box(180.0),
                black_box(Some(0.3)),
            ))
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let calculator = MetricsCalculator::default();

    for size in [100, 1000, 10000].iter() {
        let records = create_records(*size);

        group.bench_with_input(BenchmarkId::new("top_10", size), size, |b, _| {
            b.iter(|| black_box(calculator.rank(&records, 10)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_composite_score, bench_rank);
criterion_main!(benches);
