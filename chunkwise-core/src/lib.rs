//! Fixed-size chunking for slices and iterators
//!
//! Splits an ordered source into contiguous chunks of at most `k` elements,
//! preserving order, with the final chunk holding the remainder. Several
//! strategies are provided so they can be compared against each other:
//!
//! - [`chunk_slice`]: owned, exact-length copies of slice ranges
//! - [`chunk_iter`]: pre-sized buffers filled from a single-pass iterator
//! - [`chunk_views`]: borrowed ranges of a slice, no copying
//! - [`chunk_batches`]: growable lists filled from a single-pass iterator
//! - [`chunk_by_index_division`]: group-by-key baseline
//!
//! All of them reject a chunk size of zero (or below, for signed inputs)
//! with [`ChunkError::InvalidArgument`] before producing anything.
//!
//! ```
//! use chunkwise_core::chunk_slice;
//!
//! let data: Vec<i32> = (0..10).collect();
//! let chunks: Vec<Vec<i32>> = chunk_slice(&data, 3).unwrap().collect();
//! assert_eq!(chunks, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]);
//! ```

#![warn(missing_docs)]

pub mod batching;
pub mod error;
pub mod grouping;
pub mod sequence;
pub mod size;
pub mod slice;
pub mod strategy;
pub mod summary;
pub mod views;

// Re-export key types
pub use batching::{chunk_batches, Batches};
pub use error::{ChunkError, Result};
pub use grouping::{chunk_by_index_division, chunk_by_value_division};
pub use sequence::{chunk_iter, chunk_iter_to_vec, IteratorChunkExt, SequenceChunks};
pub use size::{ChunkSize, IntoChunkSize};
pub use slice::{chunk_slice, chunk_slice_to_vec, SliceChunkExt, SliceChunks};
pub use strategy::ChunkStrategy;
pub use summary::ChunkSummary;
pub use views::{chunk_views, ChunkView, ChunkViews};
