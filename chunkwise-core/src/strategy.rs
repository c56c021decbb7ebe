//! Strategy selector for comparing chunkers side by side

use crate::{
    batching::chunk_batches,
    error::{ChunkError, Result},
    grouping::chunk_by_index_division,
    sequence::chunk_iter,
    size::IntoChunkSize,
    slice::chunk_slice,
    views::chunk_views,
};
use std::fmt;
use std::str::FromStr;

/// Available chunking strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ChunkStrategy {
    /// Copy exact-length ranges out of a slice
    SliceCopy,
    /// Buffer a single-pass iterator into pre-sized chunks
    Sequence,
    /// Group elements on `index / size` (slow baseline)
    Grouping,
    /// Borrow ranges of a slice without copying
    Views,
    /// Buffer a single-pass iterator into growable lists
    Batching,
}

impl ChunkStrategy {
    /// Every strategy, in reporting order
    pub const ALL: [ChunkStrategy; 5] = [
        ChunkStrategy::SliceCopy,
        ChunkStrategy::Sequence,
        ChunkStrategy::Grouping,
        ChunkStrategy::Views,
        ChunkStrategy::Batching,
    ];

    /// Stable kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            ChunkStrategy::SliceCopy => "slice-copy",
            ChunkStrategy::Sequence => "sequence",
            ChunkStrategy::Grouping => "grouping",
            ChunkStrategy::Views => "views",
            ChunkStrategy::Batching => "batching",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            ChunkStrategy::SliceCopy => "copies exact-length ranges out of a slice",
            ChunkStrategy::Sequence => "buffers an iterator into pre-sized chunks",
            ChunkStrategy::Grouping => "groups by index / size, then materializes (baseline)",
            ChunkStrategy::Views => "borrows slice ranges without copying",
            ChunkStrategy::Batching => "buffers an iterator into growable lists",
        }
    }

    /// Whether chunks are independent copies of the source
    pub fn is_copying(&self) -> bool {
        !matches!(self, ChunkStrategy::Views)
    }

    /// Whether the strategy can consume a single-pass source lazily
    pub fn is_streaming(&self) -> bool {
        matches!(self, ChunkStrategy::Sequence | ChunkStrategy::Batching)
    }

    /// Split `source` eagerly with this strategy
    pub fn split<T, S>(&self, source: &[T], chunk_max_size: S) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
        S: IntoChunkSize,
    {
        let mut chunks = Vec::new();
        self.visit(source, chunk_max_size, |chunk| chunks.push(chunk.to_vec()))?;
        Ok(chunks)
    }

    /// Hand every chunk to `visitor` in order and return the chunk count.
    ///
    /// The outer sequence is never collected, so this measures the cost of
    /// producing chunks and nothing else.
    pub fn visit<T, S, F>(&self, source: &[T], chunk_max_size: S, mut visitor: F) -> Result<usize>
    where
        T: Clone,
        S: IntoChunkSize,
        F: FnMut(&[T]),
    {
        let size = chunk_max_size.into_chunk_size()?;
        log::debug!(
            "visiting {} elements with strategy {} (chunk size {})",
            source.len(),
            self,
            size
        );

        let mut count = 0;
        match self {
            ChunkStrategy::SliceCopy => {
                for chunk in chunk_slice(source, size)? {
                    visitor(&chunk);
                    count += 1;
                }
            }
            ChunkStrategy::Sequence => {
                for chunk in chunk_iter(source.iter().cloned(), size)? {
                    visitor(&chunk);
                    count += 1;
                }
            }
            ChunkStrategy::Grouping => {
                for chunk in chunk_by_index_division(source.iter().cloned(), size)? {
                    visitor(&chunk);
                    count += 1;
                }
            }
            ChunkStrategy::Views => {
                for view in chunk_views(source, size)? {
                    visitor(view.as_slice());
                    count += 1;
                }
            }
            ChunkStrategy::Batching => {
                for batch in chunk_batches(source.iter().cloned(), size)? {
                    visitor(&batch);
                    count += 1;
                }
            }
        }

        Ok(count)
    }
}

impl fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ChunkStrategy {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ChunkStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| ChunkError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}
