//! Copying chunker for slices
//!
//! The source length is known upfront, so every chunk is allocated with
//! exactly its element count and filled with a single clone of the range.

use crate::{
    error::Result,
    size::{ChunkSize, IntoChunkSize},
};
use std::iter::FusedIterator;

/// Lazy iterator over owned copies of consecutive slice ranges
///
/// Created by [`chunk_slice`] or [`SliceChunkExt::chunk_copies`].
#[derive(Debug, Clone)]
pub struct SliceChunks<'a, T> {
    source: &'a [T],
    size: ChunkSize,
}

impl<'a, T> SliceChunks<'a, T> {
    fn new(source: &'a [T], size: ChunkSize) -> Self {
        Self { source, size }
    }

    /// The chunk size this iterator was created with
    pub fn chunk_size(&self) -> ChunkSize {
        self.size
    }

    /// Elements not yet returned
    pub fn remaining(&self) -> &'a [T] {
        self.source
    }
}

impl<T: Clone> Iterator for SliceChunks<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            return None;
        }

        let len = self.size.get().min(self.source.len());
        let (head, tail) = self.source.split_at(len);
        self.source = tail;

        Some(head.to_vec())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }

    fn count(self) -> usize {
        self.len()
    }
}

impl<T: Clone> DoubleEndedIterator for SliceChunks<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            return None;
        }

        // The last chunk holds the remainder, or a full chunk when the length divides evenly
        let remainder = self.source.len() % self.size.get();
        let len = if remainder == 0 {
            self.size.get()
        } else {
            remainder
        };
        let (head, tail) = self.source.split_at(self.source.len() - len);
        self.source = head;

        Some(tail.to_vec())
    }
}

impl<T: Clone> ExactSizeIterator for SliceChunks<'_, T> {
    fn len(&self) -> usize {
        self.size.chunk_count(self.source.len())
    }
}

impl<T: Clone> FusedIterator for SliceChunks<'_, T> {}

/// Split `source` into owned chunks of at most `chunk_max_size` elements.
///
/// Chunk `i` covers `source[i * k..min((i + 1) * k, len)]`. Chunks are
/// produced lazily; each is an independent `Vec` sized exactly to its
/// element count. An empty source yields no chunks.
///
/// # Errors
///
/// Returns [`ChunkError::InvalidArgument`](crate::ChunkError::InvalidArgument)
/// if `chunk_max_size` is not positive.
pub fn chunk_slice<T, S>(source: &[T], chunk_max_size: S) -> Result<SliceChunks<'_, T>>
where
    T: Clone,
    S: IntoChunkSize,
{
    let size = chunk_max_size.into_chunk_size()?;
    log::trace!("chunking slice of {} elements by {}", source.len(), size);
    Ok(SliceChunks::new(source, size))
}

/// Eager form of [`chunk_slice`].
///
/// Materializes every chunk at once; the outer vector is pre-sized to the
/// exact chunk count, so memory use is the full copy of `source`.
pub fn chunk_slice_to_vec<T, S>(source: &[T], chunk_max_size: S) -> Result<Vec<Vec<T>>>
where
    T: Clone,
    S: IntoChunkSize,
{
    let chunks = chunk_slice(source, chunk_max_size)?;
    let mut out = Vec::with_capacity(chunks.len());
    out.extend(chunks);
    Ok(out)
}

/// Copying chunk adapter for slices
pub trait SliceChunkExt<T> {
    /// See [`chunk_slice`]
    fn chunk_copies<S: IntoChunkSize>(&self, chunk_max_size: S) -> Result<SliceChunks<'_, T>>;
}

impl<T: Clone> SliceChunkExt<T> for [T] {
    fn chunk_copies<S: IntoChunkSize>(&self, chunk_max_size: S) -> Result<SliceChunks<'_, T>> {
        chunk_slice(self, chunk_max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChunkError;

    #[test]
    fn test_splits_with_remainder() {
        let data: Vec<i32> = (0..10).collect();
        let chunks = chunk_slice_to_vec(&data, 3).unwrap();

        assert_eq!(
            chunks,
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]
        );
    }

    #[test]
    fn test_exact_division() {
        let data: Vec<i32> = (0..6).collect();
        let chunks = chunk_slice_to_vec(&data, 2).unwrap();

        assert_eq!(chunks, vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        let data: Vec<i32> = Vec::new();
        let mut chunks = chunk_slice(&data, 5).unwrap();

        assert_eq!(chunks.len(), 0);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn test_chunk_larger_than_source() {
        let data = [1, 2, 3];
        let chunks = chunk_slice_to_vec(&data, 100).unwrap();

        assert_eq!(chunks, vec![vec![1, 2, 3]]);
        assert_eq!(chunks[0].capacity(), 3);
    }

    #[test]
    fn test_zero_and_negative_sizes_fail() {
        let data = [1, 2, 3];

        assert_eq!(
            chunk_slice(&data, 0usize).unwrap_err(),
            ChunkError::InvalidArgument { value: 0 }
        );
        assert_eq!(
            chunk_slice(&data, -2).unwrap_err(),
            ChunkError::InvalidArgument { value: -2 }
        );
    }

    #[test]
    fn test_exact_size_tracks_progress() {
        let data: Vec<u8> = (0..10).collect();
        let mut chunks = chunk_slice(&data, 4).unwrap();

        assert_eq!(chunks.len(), 3);
        chunks.next();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks.remaining(), &data[4..]);
    }

    #[test]
    fn test_reverse_iteration() {
        let data: Vec<i32> = (0..10).collect();
        let chunks: Vec<Vec<i32>> = chunk_slice(&data, 3).unwrap().rev().collect();

        assert_eq!(
            chunks,
            vec![vec![9], vec![6, 7, 8], vec![3, 4, 5], vec![0, 1, 2]]
        );
    }

    #[test]
    fn test_mixed_front_and_back() {
        let data: Vec<i32> = (0..7).collect();
        let mut chunks = chunk_slice(&data, 2).unwrap();

        assert_eq!(chunks.next(), Some(vec![0, 1]));
        assert_eq!(chunks.next_back(), Some(vec![6]));
        assert_eq!(chunks.next_back(), Some(vec![4, 5]));
        assert_eq!(chunks.next(), Some(vec![2, 3]));
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next_back(), None);
    }

    #[test]
    fn test_chunks_do_not_alias_source() {
        let mut data = vec![String::from("a"), String::from("b")];
        let chunks = chunk_slice_to_vec(&data, 1).unwrap();

        data[0].push('!');
        assert_eq!(chunks[0], vec![String::from("a")]);
    }

    #[test]
    fn test_extension_trait() {
        let data = [1, 2, 3, 4, 5];
        let lens: Vec<usize> = data.chunk_copies(2).unwrap().map(|c| c.len()).collect();

        assert_eq!(lens, vec![2, 2, 1]);
    }
}
