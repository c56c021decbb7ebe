//! Checksum metrics that confirm a benchmark measured real work

use crate::error::{BenchmarkError, BenchmarkResult};
use chunkwise_core::ChunkSize;

/// Running totals over the chunks a strategy produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkChecksum {
    /// Chunks seen
    pub chunk_count: usize,
    /// Elements seen across all chunks
    pub element_count: usize,
    /// Wrapping sum of every element
    pub sum: i64,
}

impl ChunkChecksum {
    /// Empty totals
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one chunk
    pub fn record(&mut self, chunk: &[i64]) {
        self.chunk_count += 1;
        self.element_count += chunk.len();
        self.sum = chunk.iter().fold(self.sum, |acc, v| acc.wrapping_add(*v));
    }

    /// Totals over every chunk in `chunks`
    pub fn of_chunks<C: AsRef<[i64]>>(chunks: impl IntoIterator<Item = C>) -> Self {
        let mut checksum = Self::new();
        for chunk in chunks {
            checksum.record(chunk.as_ref());
        }
        checksum
    }

    /// Check the totals against a `0..source_len` source chunked by `size`
    pub fn verify(&self, source_len: usize, size: ChunkSize) -> BenchmarkResult<()> {
        let expected_chunks = size.chunk_count(source_len);
        if self.chunk_count != expected_chunks {
            return Err(BenchmarkError::Validation {
                message: format!(
                    "expected {} chunks, got {}",
                    expected_chunks, self.chunk_count
                ),
            });
        }
        if self.element_count != source_len {
            return Err(BenchmarkError::Validation {
                message: format!(
                    "expected {} elements, got {}",
                    source_len, self.element_count
                ),
            });
        }
        let expected_sum = crate::data::expected_sum(source_len);
        if self.sum != expected_sum {
            return Err(BenchmarkError::Validation {
                message: format!("expected sum {}, got {}", expected_sum, self.sum),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let mut checksum = ChunkChecksum::new();
        checksum.record(&[0, 1, 2]);
        checksum.record(&[3]);

        assert_eq!(checksum.chunk_count, 2);
        assert_eq!(checksum.element_count, 4);
        assert_eq!(checksum.sum, 6);
    }

    #[test]
    fn test_verify_detects_missing_chunk() {
        let checksum = ChunkChecksum::of_chunks([vec![0i64, 1, 2], vec![3, 4, 5]]);
        let err = checksum
            .verify(7, ChunkSize::new(3).unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("expected 3 chunks, got 2"));
    }
}
