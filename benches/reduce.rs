use criterion::*;
use std::hint::black_box;

use parstat::{run_reduction, Dataset, Strategy};

fn strategy_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for &len in &[100usize, 100_000, 1_000_000] {
        let data = Dataset::generate(42, len);

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("divide_conquer_2^3", len),
            &data,
            |b, data| {
                b.iter(|| {
                    run_reduction(black_box(data), Strategy::DivideAndConquer { splits: 3 })
                        .unwrap()
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("pool_8", len), &data, |b, data| {
            b.iter(|| {
                run_reduction(black_box(data), Strategy::ThreadPool { workers: 8 }).unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("serial", len), &data, |b, data| {
            b.iter(|| {
                run_reduction(black_box(data), Strategy::DivideAndConquer { splits: 0 })
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, strategy_benchmark);
criterion_main!(benches);
