//! Benchmark configuration constants and utilities
//!
//! Defaults reproduce the reference workload; environment variables
//! override them without recompiling the benches.

use crate::constants::{source_lens, workload};
use crate::error::{BenchmarkError, BenchmarkResult};
use chunkwise_core::ChunkSize;
use std::env;

/// Chunk size override; parsed as signed so a bad value is reported, not ignored
pub const CHUNK_SIZE_VAR: &str = "CHUNKWISE_BENCHMARK_CHUNK_SIZE";

/// Comma-separated source length override
pub const SOURCE_LENS_VAR: &str = "CHUNKWISE_BENCHMARK_SOURCE_LENS";

/// Get the raw chunk size from environment or use default
pub fn get_chunk_size() -> i64 {
    env::var(CHUNK_SIZE_VAR)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(workload::CHUNK_SIZE as i64)
}

/// Get source lengths from environment or use defaults
pub fn get_source_lens(use_small: bool) -> Vec<usize> {
    if let Ok(lens_str) = env::var(SOURCE_LENS_VAR) {
        parse_size_list(&lens_str)
    } else if use_small {
        source_lens::QUICK_LENS.to_vec()
    } else {
        source_lens::SCALING_LENS.to_vec()
    }
}

/// Parse `"100, 1000,x"` into `[100, 1000]`, skipping unparsable entries
pub fn parse_size_list(list: &str) -> Vec<usize> {
    list.split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect()
}

/// Configuration for benchmark runs
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub chunk_size: i64,
    pub source_lens: Vec<usize>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            chunk_size: get_chunk_size(),
            source_lens: get_source_lens(false),
        }
    }
}

impl BenchmarkConfig {
    /// Create a configuration for quick tests
    pub fn quick() -> Self {
        Self {
            chunk_size: workload::CHUNK_SIZE as i64,
            source_lens: vec![source_lens::SMALL],
        }
    }

    /// Create a configuration for comprehensive benchmarks
    pub fn comprehensive() -> Self {
        Self {
            chunk_size: workload::CHUNK_SIZE as i64,
            source_lens: vec![100, 1_000, 10_005, 100_000, 1_000_000, 10_000_000],
        }
    }

    /// The configured chunk size, validated
    pub fn chunk_size(&self) -> BenchmarkResult<ChunkSize> {
        Ok(ChunkSize::try_from(self.chunk_size)?)
    }

    /// Check that the configuration describes a runnable benchmark
    pub fn validate(&self) -> BenchmarkResult<()> {
        self.chunk_size()?;
        if self.source_lens.is_empty() {
            return Err(BenchmarkError::Config {
                message: format!("no source lengths configured (check {})", SOURCE_LENS_VAR),
            });
        }
        Ok(())
    }
}
