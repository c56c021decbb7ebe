//! Markdown output formatter

use super::OutputFormatter;
use crate::timing::{format_duration, TimingReport};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - chunks as a numbered list, timings as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
    timing_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
            timing_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn write_chunk(&mut self, _index: usize, items: &[String]) -> Result<()> {
        self.chunk_count += 1;
        let cells: Vec<String> = items.iter().map(|item| code_span(item)).collect();
        writeln!(self.writer, "{}. {}", self.chunk_count, cells.join(", "))?;
        Ok(())
    }

    fn write_timing(&mut self, report: &TimingReport) -> Result<()> {
        if self.timing_count == 0 {
            writeln!(
                self.writer,
                "| Strategy | Chunks | Checksum | Mean | Median | Min | Max | Std dev |"
            )?;
            writeln!(self.writer, "|---|---:|---:|---:|---:|---:|---:|---:|")?;
        }
        self.timing_count += 1;

        let stats = &report.stats;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} | {} | {} |",
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
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        if self.timing_count > 0 {
            writeln!(self.writer, "*Strategies compared: {}*", self.timing_count)?;
        } else {
            writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Inline code span whose fence is longer than any backtick run in `item`
fn code_span(item: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in item.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    let fence = "`".repeat(longest + 1);
    let pad = if item.starts_with('`') || item.ends_with('`') {
        " "
    } else {
        ""
    };
    format!("{fence}{pad}{item}{pad}{fence}")
}
