//! Buffered chunker for single-pass iterators
//!
//! The source length is unknown, so elements are accumulated into a buffer
//! pre-sized to the chunk size. A chunk is emitted the moment the buffer is
//! full; the next element is not pulled until the caller asks for the next
//! chunk, which keeps at most one chunk of elements in memory.

use crate::{
    error::Result,
    size::{ChunkSize, IntoChunkSize},
};
use std::iter::FusedIterator;

/// Largest buffer reserved up front, in elements.
///
/// Chunks larger than this still work; the buffer simply grows on demand
/// past this point instead of reserving `chunk_max_size` slots for what may
/// be a short source.
pub const PREALLOCATION_LIMIT: usize = 64 * 1024;

/// Lazy iterator over fixed-size chunks of an iterator
///
/// Created by [`chunk_iter`] or [`IteratorChunkExt::chunked`].
#[derive(Debug, Clone)]
pub struct SequenceChunks<I> {
    inner: I,
    size: ChunkSize,
    done: bool,
}

impl<I: Iterator> SequenceChunks<I> {
    fn new(inner: I, size: ChunkSize) -> Self {
        Self {
            inner,
            size,
            done: false,
        }
    }

    /// The chunk size this iterator was created with
    pub fn chunk_size(&self) -> ChunkSize {
        self.size
    }

    /// Consume the adapter, returning the source iterator
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for SequenceChunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let size = self.size.get();
        let mut buffer = Vec::with_capacity(size.min(PREALLOCATION_LIMIT));

        while buffer.len() < size {
            match self.inner.next() {
                Some(item) => buffer.push(item),
                None => {
                    self.done = true;
                    break;
                }
            }
        }

        if buffer.is_empty() {
            return None;
        }

        if buffer.len() < size {
            // Final partial chunk: trim the spare capacity
            buffer.shrink_to_fit();
        }

        Some(buffer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.inner.size_hint();
        (
            self.size.chunk_count(lo),
            hi.map(|hi| self.size.chunk_count(hi)),
        )
    }
}

impl<I: Iterator> FusedIterator for SequenceChunks<I> {}

/// Split a single-pass `source` into chunks of at most `chunk_max_size`.
///
/// Every chunk but the last holds exactly `chunk_max_size` elements; the last
/// holds the remainder and is only produced when at least one element is left
/// over. An empty source yields no chunks. The source is consumed lazily as
/// chunks are requested.
///
/// # Errors
///
/// Returns [`ChunkError::InvalidArgument`](crate::ChunkError::InvalidArgument)
/// if `chunk_max_size` is not positive. The source is not touched in that case.
pub fn chunk_iter<I, S>(source: I, chunk_max_size: S) -> Result<SequenceChunks<I::IntoIter>>
where
    I: IntoIterator,
    S: IntoChunkSize,
{
    let size = chunk_max_size.into_chunk_size()?;
    log::trace!("chunking sequence by {}", size);
    Ok(SequenceChunks::new(source.into_iter(), size))
}

/// Eager form of [`chunk_iter`]; collects every chunk before returning.
pub fn chunk_iter_to_vec<I, S>(source: I, chunk_max_size: S) -> Result<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
    S: IntoChunkSize,
{
    Ok(chunk_iter(source, chunk_max_size)?.collect())
}

/// Buffered chunk adapter for any iterable
pub trait IteratorChunkExt: IntoIterator + Sized {
    /// See [`chunk_iter`]
    fn chunked<S: IntoChunkSize>(self, chunk_max_size: S) -> Result<SequenceChunks<Self::IntoIter>> {
        chunk_iter(self, chunk_max_size)
    }
}

impl<I: IntoIterator> IteratorChunkExt for I {}
