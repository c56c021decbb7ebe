//! Error types for benchmarking operations

use chunkwise_core::ChunkError;
use thiserror::Error;

/// Result type for benchmark operations
pub type BenchmarkResult<T> = Result<T, BenchmarkError>;

/// Error types that can occur during benchmarking
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// A strategy produced output that disagrees with the source
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Chunking rejected its arguments
    #[error("Chunking error: {0}")]
    Chunking(#[from] ChunkError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}
