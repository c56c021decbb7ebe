//! Benchmark utilities and metrics for chunkwise
//!
//! This crate provides common functionality for benchmarking the chunking
//! strategies: fixture data, checksum verification, environment-driven
//! configuration and Criterion setup.

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod harness;
pub mod metrics;

pub use config::BenchmarkConfig;
pub use data::{expected_sum, sequential_data, sequential_iter};
pub use error::{BenchmarkError, BenchmarkResult};
pub use metrics::ChunkChecksum;
