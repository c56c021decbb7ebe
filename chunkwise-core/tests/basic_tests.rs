//! Basic tests for chunkwise-core

use chunkwise_core::*;

/// Reference benchmark source: 0..10005
fn benchmark_source() -> Vec<i64> {
    (0..10_005).collect()
}

#[test]
fn test_ten_elements_by_three() {
    let data: Vec<i32> = (0..10).collect();
    let expected = vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]];

    assert_eq!(chunk_slice_to_vec(&data, 3).unwrap(), expected);
    assert_eq!(chunk_iter_to_vec(data.iter().copied(), 3).unwrap(), expected);
    assert_eq!(chunk_by_index_division(data.clone(), 3).unwrap(), expected);
    assert_eq!(
        chunk_batches(data.clone(), 3).unwrap().collect::<Vec<_>>(),
        expected
    );
    assert_eq!(
        chunk_views(&data, 3)
            .unwrap()
            .map(|v| v.to_vec())
            .collect::<Vec<_>>(),
        expected
    );
}

#[test]
fn test_empty_source_by_five() {
    let data: Vec<i32> = Vec::new();

    assert_eq!(chunk_slice(&data, 5).unwrap().count(), 0);
    assert_eq!(chunk_iter(data.iter(), 5).unwrap().count(), 0);
    assert_eq!(chunk_views(&data, 5).unwrap().count(), 0);
    assert_eq!(chunk_batches(data.iter(), 5).unwrap().count(), 0);
    assert!(chunk_by_index_division(data.iter(), 5).unwrap().is_empty());
}

#[test]
fn test_benchmark_source_shape_and_sum() {
    let data = benchmark_source();
    let size = ChunkSize::new(1000).unwrap();

    for strategy in ChunkStrategy::ALL {
        let mut lengths = Vec::new();
        let mut sum = 0i64;
        let count = strategy
            .visit(&data, size, |chunk| {
                lengths.push(chunk.len());
                sum += chunk.iter().sum::<i64>();
            })
            .unwrap();

        assert_eq!(count, 11, "{strategy}");
        assert_eq!(lengths.last(), Some(&5), "{strategy}");
        assert_eq!(sum, 50_025_010, "{strategy}");

        let summary = ChunkSummary::from_lengths(lengths);
        assert!(summary.is_well_formed(size), "{strategy}");
    }
}

#[test]
fn test_value_grouping_matches_on_benchmark_source() {
    let data = benchmark_source();
    let by_value = chunk_by_value_division(data.iter().copied(), 1000).unwrap();
    let by_index = chunk_by_index_division(data, 1000).unwrap();

    assert_eq!(by_value, by_index);
}

#[test]
fn test_invalid_sizes_fail_for_every_entry_point() {
    let data = [1, 2, 3];

    for size in [0i64, -1, i64::MIN] {
        let expected = ChunkError::InvalidArgument { value: size };
        assert_eq!(chunk_slice(&data, size).unwrap_err(), expected);
        assert_eq!(chunk_iter(data, size).unwrap_err(), expected);
        assert_eq!(chunk_views(&data, size).unwrap_err(), expected);
        assert_eq!(chunk_batches(data, size).unwrap_err(), expected);
        assert_eq!(chunk_by_index_division(data, size).unwrap_err(), expected);
        assert_eq!(ChunkSize::try_from(size).unwrap_err(), expected);
    }
}

#[test]
fn test_extension_traits() {
    let data = vec!['a', 'b', 'c', 'd', 'e'];

    let copies: Vec<Vec<char>> = data.chunk_copies(2).unwrap().collect();
    let streamed: Vec<Vec<char>> = data.iter().copied().chunked(2).unwrap().collect();

    assert_eq!(copies, streamed);
    assert_eq!(copies.len(), 3);
}

#[test]
fn test_sequence_variant_on_unsized_source() {
    // filter() hides the length from the chunker
    let evens = (0..20).filter(|n| n % 2 == 0);
    let chunks = chunk_iter_to_vec(evens, 4).unwrap();

    assert_eq!(
        chunks,
        vec![vec![0, 2, 4, 6], vec![8, 10, 12, 14], vec![16, 18]]
    );
}
