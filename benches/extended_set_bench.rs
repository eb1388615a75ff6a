//! Benchmark for ExtendedSet::union vs collecting HashSet::union.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use extended_collections::collections::ExtendedSet;
use std::collections::HashSet;
use std::hint::black_box;

fn benchmark_union(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("union");

    for size in [100, 1_000, 10_000] {
        let left: ExtendedSet<i32> = (0..size).collect();
        let right: ExtendedSet<i32> = (size / 2..size + size / 2).collect();
        let standard_left: HashSet<i32> = (0..size).collect();
        let standard_right: HashSet<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("ExtendedSet", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.union(&right)));
        });

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    standard_left
                        .union(&standard_right)
                        .copied()
                        .collect::<HashSet<i32>>(),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_union);
criterion_main!(benches);
