//! Error types for chunking operations

use thiserror::Error;

/// Errors raised by the chunking operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// Chunk max size was zero or negative
    #[error("invalid argument: chunk max size must be positive, got {value}")]
    InvalidArgument {
        /// The rejected chunk max size
        value: i64,
    },

    /// Strategy name did not match any known strategy
    #[error("unknown chunking strategy '{name}'")]
    UnknownStrategy {
        /// The name that failed to parse
        name: String,
    },
}

impl ChunkError {
    /// Whether this is the invalid-argument error for a bad chunk size
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ChunkError::InvalidArgument { .. })
    }
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkError>;
