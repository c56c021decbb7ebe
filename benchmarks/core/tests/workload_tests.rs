//! Tests that the benchmark fixtures and checks describe the reference workload

use chunkwise_benchmarks::{
    constants::{workload, CHUNK_SIZES},
    expected_sum, sequential_data, sequential_iter, BenchmarkError, ChunkChecksum,
};
use chunkwise_core::{chunk_by_value_division, chunk_iter, ChunkSize, ChunkStrategy};
use proptest::prelude::*;

#[test]
fn test_reference_constants_agree() {
    assert_eq!(expected_sum(workload::SOURCE_LEN), workload::CHECKSUM);
    assert_eq!(
        ChunkSize::new(workload::CHUNK_SIZE)
            .unwrap()
            .chunk_count(workload::SOURCE_LEN),
        11
    );
}

#[test]
fn test_every_strategy_passes_verification() {
    let data = sequential_data(workload::SOURCE_LEN);
    for &chunk_size in CHUNK_SIZES {
        let size = ChunkSize::new(chunk_size).unwrap();
        for strategy in ChunkStrategy::ALL {
            let mut checksum = ChunkChecksum::new();
            strategy
                .visit(&data, size, |chunk| checksum.record(chunk))
                .unwrap();
            checksum
                .verify(workload::SOURCE_LEN, size)
                .unwrap_or_else(|e| panic!("{strategy} at {chunk_size}: {e}"));
        }
    }
}

#[test]
fn test_value_grouping_matches_on_fixture() {
    let size = ChunkSize::new(workload::CHUNK_SIZE).unwrap();
    let data = sequential_data(workload::SOURCE_LEN);
    let grouped = chunk_by_value_division(data, size).unwrap();

    let checksum = ChunkChecksum::of_chunks(&grouped);
    assert!(checksum.verify(workload::SOURCE_LEN, size).is_ok());
    assert_eq!(grouped.last().map(Vec::len), Some(5));
}

#[test]
fn test_lazy_fixture_passes_verification() {
    let size = ChunkSize::new(workload::CHUNK_SIZE).unwrap();

    let streamed = chunk_iter(sequential_iter(workload::SOURCE_LEN), size).unwrap();
    assert!(ChunkChecksum::of_chunks(streamed)
        .verify(workload::SOURCE_LEN, size)
        .is_ok());

    let grouped = chunk_by_value_division(sequential_iter(workload::SOURCE_LEN), size).unwrap();
    assert_eq!(grouped.len(), 11);
    assert_eq!(ChunkChecksum::of_chunks(&grouped).sum, workload::CHECKSUM);
}

#[test]
fn test_verify_reports_wrong_sum() {
    let size = ChunkSize::new(2).unwrap();
    let checksum = ChunkChecksum::of_chunks([vec![0i64, 1], vec![2, 99]]);

    match checksum.verify(4, size) {
        Err(BenchmarkError::Validation { message }) => {
            assert_eq!(message, "expected sum 6, got 102");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

proptest! {
    #[test]
    fn prop_checksum_matches_closed_form(len in 0usize..5_000, k in 1usize..600) {
        let size = ChunkSize::new(k).unwrap();
        let data = sequential_data(len);
        let chunks = ChunkStrategy::SliceCopy.split(&data, size).unwrap();
        let checksum = ChunkChecksum::of_chunks(&chunks);

        prop_assert_eq!(checksum.sum, expected_sum(len));
        prop_assert!(checksum.verify(len, size).is_ok());
    }
}
