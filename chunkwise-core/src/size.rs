//! Validated chunk size

use crate::error::{ChunkError, Result};
use std::fmt;
use std::num::NonZeroUsize;

/// Upper bound on the number of elements in a single chunk.
///
/// A `ChunkSize` is always positive. Every chunking operation converts its
/// size argument into one of these before producing any output, so a zero or
/// negative size fails with [`ChunkError::InvalidArgument`] up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    /// Create a chunk size, rejecting zero
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(ChunkSize)
            .ok_or(ChunkError::InvalidArgument { value: 0 })
    }

    /// The size as a plain `usize`
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Number of chunks needed to cover `len` elements
    pub fn chunk_count(self, len: usize) -> usize {
        len.div_ceil(self.get())
    }
}

impl From<NonZeroUsize> for ChunkSize {
    fn from(size: NonZeroUsize) -> Self {
        ChunkSize(size)
    }
}

impl From<ChunkSize> for usize {
    fn from(size: ChunkSize) -> Self {
        size.get()
    }
}

impl TryFrom<usize> for ChunkSize {
    type Error = ChunkError;

    fn try_from(size: usize) -> Result<Self> {
        ChunkSize::new(size)
    }
}

impl TryFrom<i64> for ChunkSize {
    type Error = ChunkError;

    fn try_from(size: i64) -> Result<Self> {
        if size <= 0 {
            return Err(ChunkError::InvalidArgument { value: size });
        }
        // Positive values beyond usize::MAX saturate; no source can be that long.
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        ChunkSize::new(size)
    }
}

impl TryFrom<i32> for ChunkSize {
    type Error = ChunkError;

    fn try_from(size: i32) -> Result<Self> {
        ChunkSize::try_from(i64::from(size))
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversion accepted by every chunking entry point.
///
/// Implemented for the integer types callers are likely to hold, so both
/// `chunk_slice(&data, 3)` and `chunk_slice(&data, size)` work and signed
/// values are validated the same way as unsigned ones.
pub trait IntoChunkSize {
    /// Validate and convert into a [`ChunkSize`]
    fn into_chunk_size(self) -> Result<ChunkSize>;
}

impl IntoChunkSize for ChunkSize {
    fn into_chunk_size(self) -> Result<ChunkSize> {
        Ok(self)
    }
}

impl IntoChunkSize for NonZeroUsize {
    fn into_chunk_size(self) -> Result<ChunkSize> {
        Ok(ChunkSize(self))
    }
}

impl IntoChunkSize for usize {
    fn into_chunk_size(self) -> Result<ChunkSize> {
        ChunkSize::new(self)
    }
}

impl IntoChunkSize for u32 {
    fn into_chunk_size(self) -> Result<ChunkSize> {
        ChunkSize::try_from(i64::from(self))
    }
}

impl IntoChunkSize for i32 {
    fn into_chunk_size(self) -> Result<ChunkSize> {
        ChunkSize::try_from(self)
    }
}

impl IntoChunkSize for i64 {
    fn into_chunk_size(self) -> Result<ChunkSize> {
        ChunkSize::try_from(self)
    }
}
