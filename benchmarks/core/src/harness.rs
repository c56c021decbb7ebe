//! Common benchmark harness utilities
//!
//! Shared Criterion configuration so every bench file measures the same way.

use crate::constants::bench_profiles;
use criterion::{measurement::WallTime, BenchmarkGroup, Criterion, Throughput};

/// Criterion configured for the reference workload
pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(bench_profiles::WORKLOAD_WARMUP_TIME)
        .measurement_time(bench_profiles::WORKLOAD_MEASUREMENT_TIME)
        .sample_size(bench_profiles::WORKLOAD_SAMPLE_SIZE)
        .noise_threshold(0.05)
}

/// Criterion configured for the longer scaling sweeps
pub fn configure_scalability_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(bench_profiles::SCALABILITY_WARMUP_TIME)
        .measurement_time(bench_profiles::SCALABILITY_MEASUREMENT_TIME)
        .sample_size(bench_profiles::SCALABILITY_SAMPLE_SIZE)
        .noise_threshold(0.05)
}

/// Report throughput in source elements per second
pub fn setup_throughput(group: &mut BenchmarkGroup<'_, WallTime>, source_len: usize) {
    group.throughput(Throughput::Elements(source_len as u64));
}
