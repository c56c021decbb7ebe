//! Scalability benchmarks for chunkwise
//!
//! Sweeps source length at the reference chunk size, and chunk size at the
//! reference source length, for every strategy. The source is built once per
//! input so only chunking is measured.

use chunkwise_benchmarks::{
    constants::{workload, CHUNK_SIZES},
    harness::{configure_scalability_criterion, setup_throughput},
    sequential_data, BenchmarkConfig,
};
use chunkwise_core::{ChunkSize, ChunkStrategy};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn checksum_with(strategy: ChunkStrategy, data: &[i64], size: ChunkSize) -> i64 {
    let mut sum = 0i64;
    strategy
        .visit(data, size, |chunk| {
            for value in chunk {
                sum = sum.wrapping_add(*value);
            }
        })
        .expect("chunk size was validated");
    sum
}

/// Benchmark how each strategy scales with source length
fn bench_source_len_scaling(c: &mut Criterion) {
    let config = BenchmarkConfig::default();
    config
        .validate()
        .expect("benchmark configuration must be valid");
    let size = config.chunk_size().expect("validated above");

    let mut group = c.benchmark_group("source_len_scaling");

    for &len in &config.source_lens {
        let data = sequential_data(len);
        setup_throughput(&mut group, len);

        for strategy in ChunkStrategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), len), &data, |b, data| {
                b.iter(|| checksum_with(strategy, black_box(data), size))
            });
        }
    }

    group.finish();
}

/// Benchmark the effect of chunk size at the reference source length
fn bench_chunk_size_impact(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_size_impact");

    let data = sequential_data(workload::SOURCE_LEN);
    setup_throughput(&mut group, data.len());

    for &chunk_size in CHUNK_SIZES {
        let size = ChunkSize::new(chunk_size).expect("chunk sizes are positive");

        for strategy in ChunkStrategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), chunk_size),
                &data,
                |b, data| b.iter(|| checksum_with(strategy, black_box(data), size)),
            );
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = configure_scalability_criterion();
    targets = bench_source_len_scaling, bench_chunk_size_impact
}
criterion_main!(benches);
