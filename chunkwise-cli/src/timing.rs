//! Timing statistics for the bench command

use anyhow::Result;
use chunkwise_core::ChunkStrategy;
use std::time::{Duration, Instant};

/// Aggregate statistics over a set of timing samples
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimingStats {
    /// Number of samples
    pub samples: usize,
    /// Arithmetic mean
    pub mean: Duration,
    /// Median (mean of the two middle samples for even counts)
    pub median: Duration,
    /// Fastest sample
    pub min: Duration,
    /// Slowest sample
    pub max: Duration,
    /// Population standard deviation
    pub std_dev: Duration,
}

impl TimingStats {
    /// Compute statistics from raw samples; empty input gives zeroed stats
    pub fn from_samples(samples: &[Duration]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let total: f64 = sorted.iter().map(Duration::as_secs_f64).sum();
        let mean = total / n as f64;

        let variance = sorted
            .iter()
            .map(|d| {
                let diff = d.as_secs_f64() - mean;
                diff * diff
            })
            .sum::<f64>()
            / n as f64;

        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2
        };

        Self {
            samples: n,
            mean: Duration::from_secs_f64(mean),
            median,
            min: sorted[0],
            max: sorted[n - 1],
            std_dev: Duration::from_secs_f64(variance.sqrt()),
        }
    }
}

/// Timing result for one strategy
#[derive(Debug, Clone, PartialEq)]
pub struct TimingReport {
    /// Strategy that was measured
    pub strategy: ChunkStrategy,
    /// Elements in the source
    pub source_len: usize,
    /// Chunk max size used
    pub chunk_size: usize,
    /// Chunks produced per run
    pub chunk_count: usize,
    /// Sum over every element of every chunk
    pub checksum: i64,
    /// Aggregate timings
    pub stats: TimingStats,
}

/// Upper bound on up-front sample storage; larger runs grow as they go
const MAX_PREALLOCATED_SAMPLES: usize = 4096;

/// Run `f` `warmup` times untimed, then `iterations` times timed.
///
/// Returns the timed samples and the value of the last call. Any error from
/// `f` aborts the measurement.
pub fn measure<R, F>(warmup: usize, iterations: usize, mut f: F) -> Result<(Vec<Duration>, Option<R>)>
where
    F: FnMut() -> Result<R>,
{
    for _ in 0..warmup {
        std::hint::black_box(f()?);
    }

    let mut samples = Vec::with_capacity(iterations.min(MAX_PREALLOCATED_SAMPLES));
    let mut last = None;
    for _ in 0..iterations {
        let start = Instant::now();
        let value = f()?;
        samples.push(start.elapsed());
        last = Some(value);
    }

    Ok((samples, last))
}

/// Human-readable duration with a unit suited to its magnitude
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2} µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", d.as_secs_f64())
    }
}
