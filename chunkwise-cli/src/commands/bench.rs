//! Bench command implementation

use crate::{
    commands::init_logging,
    config::CliConfig,
    error::CliError,
    output::{create_formatter, OutputFormat},
    progress::ProgressReporter,
    timing::{format_duration, measure, TimingReport, TimingStats},
};
use anyhow::{Context, Result};
use chunkwise_core::{ChunkSize, ChunkStrategy};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the bench command
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Number of source elements; the source is 0..N
    #[arg(short = 'n', long, value_name = "N")]
    pub len: Option<usize>,

    /// Maximum elements per chunk
    #[arg(short = 'k', long, value_name = "K", allow_negative_numbers = true)]
    pub chunk_size: Option<i64>,

    /// Timed runs per strategy
    #[arg(long, value_name = "N")]
    pub iterations: Option<usize>,

    /// Untimed runs per strategy before measuring
    #[arg(long, value_name = "N")]
    pub warmup: Option<usize>,

    /// Strategy to include (repeatable; default: all)
    #[arg(short, long = "strategy", value_name = "NAME")]
    pub strategies: Vec<ChunkStrategy>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Benchmark settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct BenchSettings {
    /// Number of source elements
    pub source_len: usize,
    /// Validated chunk size
    pub chunk_size: ChunkSize,
    /// Timed runs per strategy
    pub iterations: usize,
    /// Untimed runs per strategy
    pub warmup: usize,
    /// Strategies to compare, in order
    pub strategies: Vec<ChunkStrategy>,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl BenchArgs {
    /// Execute the bench command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let settings = self.resolve(&config)?;
        log::info!(
            "Benchmarking {} strategies on {} elements, chunk size {}",
            settings.strategies.len(),
            settings.source_len,
            settings.chunk_size
        );
        log::debug!("Settings: {:?}", settings);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_runs(settings.total_runs()?);
        let reports = run_benchmark(&settings, &progress);
        progress.finish();
        let reports = reports?;

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(settings.format, writer, settings.pretty_json);
        for report in &reports {
            formatter.write_timing(report)?;
        }
        formatter.finish()
    }

    /// Merge command-line flags over `config`
    pub fn resolve(&self, config: &CliConfig) -> Result<BenchSettings> {
        let raw_size = self.chunk_size.unwrap_or(config.chunking.chunk_size);
        let chunk_size = ChunkSize::try_from(raw_size).map_err(CliError::from)?;

        let strategies = if self.strategies.is_empty() {
            config.benchmark.strategies.clone()
        } else {
            self.strategies.clone()
        };
        if strategies.is_empty() {
            return Err(CliError::ConfigError("no strategies selected".to_string()).into());
        }

        let settings = BenchSettings {
            source_len: self.len.unwrap_or(config.benchmark.source_len),
            chunk_size,
            iterations: self.iterations.unwrap_or(config.benchmark.iterations),
            warmup: self.warmup.unwrap_or(config.benchmark.warmup),
            strategies,
            format: self.format.unwrap_or(config.output.format),
            pretty_json: config.output.pretty_json,
        };
        settings.total_runs()?;
        Ok(settings)
    }
}

impl BenchSettings {
    /// Chunking runs across every strategy, warmup included
    pub fn total_runs(&self) -> Result<u64> {
        self.warmup
            .checked_add(self.iterations)
            .and_then(|per_strategy| per_strategy.checked_mul(self.strategies.len()))
            .and_then(|total| u64::try_from(total).ok())
            .ok_or_else(|| {
                CliError::ConfigError(format!(
                    "run count overflows: {} warmup + {} iterations for {} strategies",
                    self.warmup,
                    self.iterations,
                    self.strategies.len()
                ))
                .into()
            })
    }
}

/// The benchmark source: `0..len` as 64-bit integers
pub fn benchmark_source(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}

/// Wrapping sum, so oversized sources cannot overflow
fn checksum(values: &[i64]) -> i64 {
    values.iter().fold(0i64, |acc, v| acc.wrapping_add(*v))
}

/// One chunking pass; returns (chunk count, element checksum)
fn run_once(strategy: ChunkStrategy, source: &[i64], size: ChunkSize) -> Result<(usize, i64)> {
    let mut sum = 0i64;
    let count = strategy.visit(source, size, |chunk| {
        sum = sum.wrapping_add(checksum(chunk));
    })?;
    Ok((count, std::hint::black_box(sum)))
}

/// Time every strategy in `settings` and verify that all of them agree
pub fn run_benchmark(
    settings: &BenchSettings,
    progress: &ProgressReporter,
) -> Result<Vec<TimingReport>> {
    let source = benchmark_source(settings.source_len);
    let expected_sum = checksum(&source);
    let expected_count = settings.chunk_size.chunk_count(source.len());

    let mut reports = Vec::with_capacity(settings.strategies.len());
    for &strategy in &settings.strategies {
        progress.strategy_started(strategy.name());

        let (samples, last) = measure(settings.warmup, settings.iterations, || {
            let result = run_once(strategy, &source, settings.chunk_size);
            progress.run_completed();
            result
        })?;

        // Zero timed iterations still get one verification pass
        let (chunk_count, sum) = match last {
            Some(result) => result,
            None => run_once(strategy, &source, settings.chunk_size)?,
        };

        if sum != expected_sum {
            return Err(CliError::ChecksumMismatch {
                strategy: strategy.name().to_string(),
                expected: expected_sum,
                actual: sum,
            }
            .into());
        }
        if chunk_count != expected_count {
            return Err(CliError::ChunkCountMismatch {
                strategy: strategy.name().to_string(),
                expected: expected_count,
                actual: chunk_count,
            }
            .into());
        }

        let stats = TimingStats::from_samples(&samples);
        log::info!(
            "{}: mean {} over {} runs",
            strategy,
            format_duration(stats.mean),
            stats.samples
        );

        reports.push(TimingReport {
            strategy,
            source_len: settings.source_len,
            chunk_size: settings.chunk_size.get(),
            chunk_count,
            checksum: sum,
            stats,
        });
    }

    Ok(reports)
}
