//! Chainset Benchmarks
//!
//! Benchmarks for the chained hash set, implemented using the Criterion
//! framework, which provides statistical analysis and performance regression
//! detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

use chainset_lib::data_structures::chained_hash_set::{
    ChainedHashSet, ChainedHashSetConfig, HashStrategy,
};

fn values(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("line number {i}")).collect()
}

/// Benchmark inserts, including the resizes they trigger
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_hash_set_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for strategy in [HashStrategy::Additive, HashStrategy::Fnv] {
        for size in [100, 1_000, 10_000] {
            let input = values(size);
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), size),
                &input,
                |b, input| {
                    b.iter(|| {
                        let config = ChainedHashSetConfig::new()
                            .with_initial_capacity(20)
                            .with_hash_strategy(strategy);
                        let mut set = ChainedHashSet::with_config(config).unwrap();
                        for value in input {
                            set.insert(black_box(value));
                        }
                        set
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark lookups against a populated table
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_hash_set_lookup");
    group.measurement_time(Duration::from_secs(2));

    for strategy in [HashStrategy::Additive, HashStrategy::Fnv] {
        let input = values(10_000);
        let config = ChainedHashSetConfig::new().with_hash_strategy(strategy);
        let mut set = ChainedHashSet::with_config(config).unwrap();
        for value in &input {
            set.insert(value);
        }

        group.throughput(Throughput::Elements(input.len() as u64));
        group.bench_function(format!("{strategy:?}"), |b| {
            b.iter(|| input.iter().filter(|v| set.lookup(black_box(v))).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup);
criterion_main!(benches);
