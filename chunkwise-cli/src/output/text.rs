//! Plain text output formatter

use super::OutputFormatter;
use crate::timing::{format_duration, TimingReport};
use anyhow::Result;
use std::borrow::Cow;
use std::io::Write;

/// Plain text formatter - one chunk per line, timings as an aligned table
///
/// Items are joined by `", "`. A `\` or `,` inside an item is preceded by
/// `\`, so every unescaped comma is a separator.
pub struct TextFormatter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn write_chunk(&mut self, _index: usize, items: &[String]) -> Result<()> {
        let escaped: Vec<Cow<'_, str>> = items.iter().map(|item| escape_item(item)).collect();
        writeln!(self.writer, "{}", escaped.join(", "))?;
        Ok(())
    }

    fn write_timing(&mut self, report: &TimingReport) -> Result<()> {
        if !self.header_written {
            writeln!(
                self.writer,
                "{:<12} {:>7} {:>14} {:>12} {:>12} {:>12} {:>12} {:>12}",
                "strategy", "chunks", "checksum", "mean", "median", "min", "max", "std dev"
            )?;
            self.header_written = true;
        }

        let stats = &report.stats;
        writeln!(
            self.writer,
            "{:<12} {:>7} {:>14} {:>12} {:>12} {:>12} {:>12} {:>12}",
            report.strategy.name(),
            report.chunk_count,
            report.checksum,
            format_duration(stats.mean),
            format_duration(stats.median),
            format_duration(stats.min),
            format_duration(stats.max),
            format_duration(stats.std_dev),
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_item(item: &str) -> Cow<'_, str> {
    if !item.contains(|c| c == '\\' || c == ',') {
        return Cow::Borrowed(item);
    }

    let mut escaped = String::with_capacity(item.len() + 2);
    for c in item.chars() {
        if c == '\\' || c == ',' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::TimingStats;
    use chunkwise_core::ChunkStrategy;
    use std::time::Duration;

    #[test]
    fn test_chunks_one_per_line() {
        let mut buf = Vec::new();
        let mut formatter = TextFormatter::new(&mut buf);
        formatter
            .write_chunk(0, &["a".to_string(), "b".to_string()])
            .unwrap();
        formatter.write_chunk(1, &["c".to_string()]).unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "a, b\nc\n");
    }

    #[test]
    fn test_separators_inside_items_are_escaped() {
        let mut buf = Vec::new();
        let mut formatter = TextFormatter::new(&mut buf);
        formatter
            .write_chunk(0, &["a, b".to_string(), "c\\d".to_string()])
            .unwrap();
        formatter.write_chunk(1, &["a".to_string(), "b".to_string()]).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "a\\, b, c\\\\d");
        assert_eq!(lines[1], "a, b");
    }

    #[test]
    fn test_timing_table_has_single_header() {
        let report = TimingReport {
            strategy: ChunkStrategy::Views,
            source_len: 10,
            chunk_size: 3,
            chunk_count: 4,
            checksum: 45,
            stats: TimingStats::from_samples(&[Duration::from_micros(5)]),
        };

        let mut buf = Vec::new();
        let mut formatter = TextFormatter::new(&mut buf);
        formatter.write_timing(&report).unwrap();
        formatter.write_timing(&report).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().next().unwrap().starts_with("strategy"));
        assert!(out.contains("views"));
        assert!(out.contains("5.00 µs"));
    }
}
