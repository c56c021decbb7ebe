//! Group-by-key chunking baseline
//!
//! Assigns each element the key `index / chunk_max_size`, groups elements by
//! key in a hash map and then materializes one vector per key. The result
//! matches the other chunkers, but it pays for a key per element and an
//! intermediate map. Kept only as a slow reference point for benchmarks.

use crate::{error::Result, size::IntoChunkSize};
use std::collections::HashMap;

/// Split `source` by grouping on `index / chunk_max_size`.
///
/// Groups come out in the order their key is first seen, which for index
/// keys is ascending. Eager: the whole source is grouped before returning.
pub fn chunk_by_index_division<I, S>(source: I, chunk_max_size: S) -> Result<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
    S: IntoChunkSize,
{
    let size = chunk_max_size.into_chunk_size()?.get();
    log::trace!("grouping by index division, chunk size {}", size);

    Ok(group_by_key(
        source.into_iter().enumerate(),
        |(index, _)| *index / size,
        |(_, item)| item,
    ))
}

/// Split integer `source` by grouping on `value / chunk_max_size`.
///
/// This keys on the element value rather than its position, so it only
/// agrees with [`chunk_by_index_division`] when the values are `0..n` in
/// order. Negative values truncate toward zero, so `-1` and `1` share a key.
pub fn chunk_by_value_division<I, S>(source: I, chunk_max_size: S) -> Result<Vec<Vec<i64>>>
where
    I: IntoIterator<Item = i64>,
    S: IntoChunkSize,
{
    let size = chunk_max_size.into_chunk_size()?.get();
    // ChunkSize values above i64::MAX put every value in key 0
    let divisor = i64::try_from(size).unwrap_or(i64::MAX);

    Ok(group_by_key(source, |value| *value / divisor, |value| value))
}

fn group_by_key<E, K, T>(
    source: impl IntoIterator<Item = E>,
    key_of: impl Fn(&E) -> K,
    value_of: impl Fn(E) -> T,
) -> Vec<Vec<T>>
where
    K: std::hash::Hash + Eq + Copy,
{
    let mut order: Vec<K> = Vec::new();
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();

    for element in source {
        let key = key_of(&element);
        groups
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(value_of(element));
    }

    order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .map(|mut group| {
            group.shrink_to_fit();
            group
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChunkError;

    #[test]
    fn test_index_grouping_matches_contract() {
        let chunks = chunk_by_index_division(0..10, 3).unwrap();

        assert_eq!(
            chunks,
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]
        );
    }

    #[test]
    fn test_index_grouping_ignores_values() {
        let chunks = chunk_by_index_division(vec!["x", "y", "z"], 2).unwrap();
        assert_eq!(chunks, vec![vec!["x", "y"], vec!["z"]]);
    }

    #[test]
    fn test_empty_source() {
        let chunks = chunk_by_index_division(Vec::<u8>::new(), 5).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_invalid_size() {
        let err = chunk_by_index_division(0..3, 0usize).unwrap_err();
        assert_eq!(err, ChunkError::InvalidArgument { value: 0 });

        let err = chunk_by_value_division(0..3, -1).unwrap_err();
        assert_eq!(err, ChunkError::InvalidArgument { value: -1 });
    }

    #[test]
    fn test_value_grouping_on_sequential_values() {
        let chunks = chunk_by_value_division(0..10, 4).unwrap();
        assert_eq!(chunks, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9]]);
    }

    #[test]
    fn test_value_grouping_diverges_on_unordered_values() {
        let chunks = chunk_by_value_division(vec![5, 0, 6, 1], 5).unwrap();
        assert_eq!(chunks, vec![vec![5, 6], vec![0, 1]]);
    }
}
