//! Output formatting module

use crate::timing::TimingReport;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output one chunk of input lines
    fn write_chunk(&mut self, index: usize, items: &[String]) -> Result<()>;

    /// Format and output the timing result of one strategy
    fn write_timing(&mut self, report: &TimingReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON array with metadata
    Json,
    /// Markdown list or table
    Markdown,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one chunk per line / aligned timing table",
            OutputFormat::Json => "JSON array of chunks or timing records",
            OutputFormat::Markdown => "numbered list of chunks / markdown timing table",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        };
        f.pad(name)
    }
}

/// Build the formatter for `format` writing into `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
