//! Error handling for the CLI application

use chunkwise_core::ChunkError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Chunking rejected its arguments
    #[error("Chunking error: {0}")]
    Chunking(#[from] ChunkError),

    /// A strategy produced a different element sum than the source
    #[error("Checksum mismatch for {strategy}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Strategy that disagreed
        strategy: String,
        /// Sum of the source elements
        expected: i64,
        /// Sum over the produced chunks
        actual: i64,
    },

    /// A strategy produced the wrong number of chunks
    #[error("Chunk count mismatch for {strategy}: expected {expected}, got {actual}")]
    ChunkCountMismatch {
        /// Strategy that disagreed
        strategy: String,
        /// ceil(len / chunk size)
        expected: usize,
        /// Chunks actually produced
        actual: usize,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
