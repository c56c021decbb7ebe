//! Shape summary of a chunked sequence

use crate::size::ChunkSize;

/// Counts describing a sequence of chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkSummary {
    /// Number of chunks
    pub chunk_count: usize,
    /// Total elements across all chunks
    pub element_count: usize,
    /// Length of the first chunk (0 when there are none)
    pub first_len: usize,
    /// Length of the last chunk (0 when there are none)
    pub last_len: usize,
    /// Whether every chunk before the last had the same length as the first
    pub uniform_prefix: bool,
}

impl ChunkSummary {
    /// Summarize chunks from their lengths, in order
    pub fn from_lengths<I>(lengths: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut summary = ChunkSummary {
            uniform_prefix: true,
            ..Default::default()
        };
        let mut previous: Option<usize> = None;

        for len in lengths {
            if let Some(prev) = previous {
                if prev != summary.first_len {
                    summary.uniform_prefix = false;
                }
            } else {
                summary.first_len = len;
            }
            summary.chunk_count += 1;
            summary.element_count += len;
            summary.last_len = len;
            previous = Some(len);
        }

        summary
    }

    /// Summarize a slice of chunks
    pub fn of<C: AsRef<[T]>, T>(chunks: &[C]) -> Self {
        Self::from_lengths(chunks.iter().map(|c| c.as_ref().len()))
    }

    /// Check the chunking shape for `size`.
    ///
    /// Holds when the count is `ceil(elements / size)`, every chunk but the
    /// last has exactly `size` elements and the last has between 1 and `size`.
    pub fn is_well_formed(&self, size: ChunkSize) -> bool {
        let k = size.get();
        if self.chunk_count != size.chunk_count(self.element_count) {
            return false;
        }
        if self.chunk_count == 0 {
            return true;
        }
        let head_ok = self.chunk_count == 1 || (self.first_len == k && self.uniform_prefix);
        head_ok && (1..=k).contains(&self.last_len)
    }
}
