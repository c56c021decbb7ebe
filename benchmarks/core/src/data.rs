//! Fixture data for benchmarks

/// The integers `0..len`, the source every benchmark chunks
pub fn sequential_data(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}

/// Lazily produced `0..len`, for the iterator-backed benchmarks
pub fn sequential_iter(len: usize) -> impl Iterator<Item = i64> {
    0..len as i64
}

/// Sum of `0..len`, computed in closed form
pub fn expected_sum(len: usize) -> i64 {
    let n = len as i64;
    if n == 0 {
        0
    } else {
        n * (n - 1) / 2
    }
}
