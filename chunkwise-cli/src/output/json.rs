//! JSON output formatter

use super::OutputFormatter;
use crate::timing::TimingReport;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - writes one JSON array per document
///
/// Chunks are streamed: each one is written as it arrives and the array is
/// closed on finish. Timing records are few, so they are collected and
/// written together. One document holds either chunks or timings.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    chunks_written: usize,
    timings: Vec<TimingData>,
}

/// One chunk in JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChunkData {
    /// Position of the chunk in the output sequence
    pub index: usize,
    /// Number of items in the chunk
    pub len: usize,
    /// The chunk's items
    pub items: Vec<String>,
}

/// One strategy's timings in JSON output, durations in microseconds
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TimingData {
    /// Strategy name
    pub strategy: String,
    /// Elements in the source
    pub source_len: usize,
    /// Chunk max size
    pub chunk_size: usize,
    /// Chunks produced per run
    pub chunk_count: usize,
    /// Element sum across all chunks
    pub checksum: i64,
    /// Timed runs
    pub samples: usize,
    /// Mean run time
    pub mean_us: f64,
    /// Median run time
    pub median_us: f64,
    /// Fastest run
    pub min_us: f64,
    /// Slowest run
    pub max_us: f64,
    /// Standard deviation
    pub std_dev_us: f64,
}

impl From<&TimingReport> for TimingData {
    fn from(report: &TimingReport) -> Self {
        let us = |d: std::time::Duration| d.as_secs_f64() * 1_000_000.0;
        Self {
            strategy: report.strategy.name().to_string(),
            source_len: report.source_len,
            chunk_size: report.chunk_size,
            chunk_count: report.chunk_count,
            checksum: report.checksum,
            samples: report.stats.samples,
            mean_us: us(report.stats.mean),
            median_us: us(report.stats.median),
            min_us: us(report.stats.min),
            max_us: us(report.stats.max),
            std_dev_us: us(report.stats.std_dev),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter (pretty-printed)
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            chunks_written: 0,
            timings: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn write_chunk(&mut self, index: usize, items: &[String]) -> Result<()> {
        if !self.timings.is_empty() {
            bail!("cannot mix chunk and timing records in one JSON document");
        }

        let separator: &[u8] = if self.chunks_written == 0 { b"[" } else { b"," };
        self.writer.write_all(separator)?;
        if self.pretty {
            writeln!(self.writer)?;
        }

        self.write_value(&ChunkData {
            index,
            len: items.len(),
            items: items.to_vec(),
        })?;
        self.chunks_written += 1;
        Ok(())
    }

    fn write_timing(&mut self, report: &TimingReport) -> Result<()> {
        if self.chunks_written > 0 {
            bail!("cannot mix chunk and timing records in one JSON document");
        }
        self.timings.push(TimingData::from(report));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.chunks_written > 0 {
            if self.pretty {
                writeln!(self.writer)?;
            }
            self.writer.write_all(b"]")?;
        } else {
            let timings = std::mem::take(&mut self.timings);
            self.write_value(&timings)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
