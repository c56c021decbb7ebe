//! Constants for benchmarking
//!
//! This module defines common constants used across benchmarks
//! to avoid magic numbers and improve maintainability.

use std::time::Duration;

/// The reference workload
pub mod workload {
    /// Source length of the reference benchmark
    pub const SOURCE_LEN: usize = 10_005;

    /// Chunk size of the reference benchmark
    pub const CHUNK_SIZE: usize = 1_000;

    /// Sum of `0..SOURCE_LEN`
    pub const CHECKSUM: i64 = 50_025_010;
}

/// Source lengths for scaling benchmarks
pub mod source_lens {
    pub const SMALL: usize = 1_000;
    pub const MEDIUM: usize = 10_005;
    pub const LARGE: usize = 100_000;
    pub const HUGE: usize = 1_000_000;

    /// Default lengths for throughput benchmarks
    pub const SCALING_LENS: &[usize] = &[SMALL, MEDIUM, LARGE, HUGE];

    /// Lengths for quick runs
    pub const QUICK_LENS: &[usize] = &[SMALL, MEDIUM];
}

/// Chunk sizes for the chunk-size sweep; 1 and a size above the source
/// length are the degenerate ends
pub const CHUNK_SIZES: &[usize] = &[1, 16, 256, 1_000, 4_096, 65_536];

/// Benchmark configuration profiles
pub mod bench_profiles {
    use super::*;

    /// Configuration for the reference workload
    pub const WORKLOAD_SAMPLE_SIZE: usize = 50;
    pub const WORKLOAD_MEASUREMENT_TIME: Duration = Duration::from_secs(3);
    pub const WORKLOAD_WARMUP_TIME: Duration = Duration::from_secs(1);

    /// Configuration for scalability benchmarks
    pub const SCALABILITY_SAMPLE_SIZE: usize = 20;
    pub const SCALABILITY_MEASUREMENT_TIME: Duration = Duration::from_secs(5);
    pub const SCALABILITY_WARMUP_TIME: Duration = Duration::from_secs(2);
}
