//! Borrowing chunker that hands out views instead of copies
//!
//! Each [`ChunkView`] borrows a contiguous range of the source. Nothing is
//! cloned, so the source cannot be mutated while any view is alive and no
//! view can outlive it.

use crate::{
    error::Result,
    size::{ChunkSize, IntoChunkSize},
};
use std::iter::FusedIterator;
use std::ops::{Deref, Range};

/// A borrowed chunk together with its position in the source
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChunkView<'a, T> {
    start: usize,
    items: &'a [T],
}

impl<T> Clone for ChunkView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ChunkView<'_, T> {}

impl<'a, T> ChunkView<'a, T> {
    /// Index of the first element in the source
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the index of the last element in the source
    pub fn end(&self) -> usize {
        self.start + self.items.len()
    }

    /// Index range this view covers in the source
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The borrowed elements
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// Copy the viewed elements into an owned vector
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }
}

impl<T> Deref for ChunkView<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}

impl<T> AsRef<[T]> for ChunkView<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.items
    }
}

/// Lazy iterator over [`ChunkView`]s of a slice
///
/// Created by [`chunk_views`].
#[derive(Debug, Clone)]
pub struct ChunkViews<'a, T> {
    source: &'a [T],
    offset: usize,
    size: ChunkSize,
}

impl<T> ChunkViews<'_, T> {
    /// The chunk size this iterator was created with
    pub fn chunk_size(&self) -> ChunkSize {
        self.size
    }
}

impl<'a, T> Iterator for ChunkViews<'a, T> {
    type Item = ChunkView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            return None;
        }

        let len = self.size.get().min(self.source.len());
        let (head, tail) = self.source.split_at(len);
        let view = ChunkView {
            start: self.offset,
            items: head,
        };
        self.source = tail;
        self.offset += len;

        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for ChunkViews<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            return None;
        }

        let remainder = self.source.len() % self.size.get();
        let len = if remainder == 0 {
            self.size.get()
        } else {
            remainder
        };
        let split = self.source.len() - len;
        let (head, tail) = self.source.split_at(split);
        self.source = head;

        Some(ChunkView {
            start: self.offset + split,
            items: tail,
        })
    }
}

impl<T> ExactSizeIterator for ChunkViews<'_, T> {
    fn len(&self) -> usize {
        self.size.chunk_count(self.source.len())
    }
}

impl<T> FusedIterator for ChunkViews<'_, T> {}

/// Partition `source` into borrowed views of at most `chunk_max_size`.
///
/// Same ranges as [`chunk_slice`](crate::chunk_slice) without copying. Use it
/// when the caller only reads the chunks while the source is alive.
pub fn chunk_views<T, S>(source: &[T], chunk_max_size: S) -> Result<ChunkViews<'_, T>>
where
    S: IntoChunkSize,
{
    let size = chunk_max_size.into_chunk_size()?;
    log::trace!("partitioning {} elements into views of {}", source.len(), size);
    Ok(ChunkViews {
        source,
        offset: 0,
        size,
    })
}
