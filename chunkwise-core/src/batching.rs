//! Incremental batching with growable lists

use crate::{
    error::Result,
    size::{ChunkSize, IntoChunkSize},
};
use std::iter::FusedIterator;

/// Lazy iterator over batches that grow one push at a time
///
/// Same contract as [`SequenceChunks`](crate::SequenceChunks), but every
/// batch starts as an empty `Vec` and reallocates as it fills instead of
/// being sized to the chunk size up front.
#[derive(Debug, Clone)]
pub struct Batches<I: Iterator> {
    inner: I,
    size: ChunkSize,
    batch: Vec<I::Item>,
    exhausted: bool,
}

impl<I: Iterator> Iterator for Batches<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        for item in self.inner.by_ref() {
            self.batch.push(item);
            if self.batch.len() == self.size.get() {
                return Some(std::mem::take(&mut self.batch));
            }
        }

        self.exhausted = true;
        if self.batch.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.batch))
        }
    }
}

impl<I: Iterator> FusedIterator for Batches<I> {}

/// Split `source` into batches of at most `chunk_max_size` elements.
pub fn chunk_batches<I, S>(source: I, chunk_max_size: S) -> Result<Batches<I::IntoIter>>
where
    I: IntoIterator,
    S: IntoChunkSize,
{
    let size = chunk_max_size.into_chunk_size()?;
    Ok(Batches {
        inner: source.into_iter(),
        size,
        batch: Vec::new(),
        exhausted: false,
    })
}
