//! Split command implementation

use crate::{
    commands::init_logging,
    config::CliConfig,
    error::CliError,
    input::InputSource,
    output::{create_formatter, OutputFormat, OutputFormatter},
};
use anyhow::{Context, Result};
use chunkwise_core::{chunk_batches, chunk_iter, chunk_views, ChunkSize, ChunkStrategy};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob; default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Maximum lines per chunk
    #[arg(short = 'k', long, value_name = "K", allow_negative_numbers = true)]
    pub chunk_size: Option<i64>,

    /// Chunking strategy
    #[arg(short, long, value_name = "NAME")]
    pub strategy: Option<ChunkStrategy>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let raw_size = self.chunk_size.unwrap_or(config.chunking.chunk_size);
        let size = ChunkSize::try_from(raw_size).map_err(CliError::from)?;
        let strategy = self.strategy.unwrap_or(config.chunking.default_strategy);
        let format = self.format.unwrap_or(config.output.format);

        // Resolve inputs before touching the output file
        let source = InputSource::from_patterns(&self.input)?;
        log::info!("Splitting {:?} with {} by {}", source, strategy, size);

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        let count = split_source(strategy, size, &source, formatter.as_mut())?;
        formatter.finish()?;

        log::info!("Wrote {} chunks", count);
        Ok(())
    }
}

/// Chunk every input line with `strategy`, feeding chunks to `formatter`.
///
/// Streaming strategies read one chunk of lines at a time; the others read
/// the whole input first. Returns the number of chunks written.
pub fn split_source(
    strategy: ChunkStrategy,
    size: ChunkSize,
    source: &InputSource,
    formatter: &mut dyn OutputFormatter,
) -> Result<usize> {
    match strategy {
        ChunkStrategy::Sequence => write_streamed(chunk_iter(source.lines()?, size)?, formatter),
        ChunkStrategy::Batching => write_streamed(chunk_batches(source.lines()?, size)?, formatter),
        ChunkStrategy::Views => {
            let lines = source.read_all()?;
            let mut count = 0;
            for (index, view) in chunk_views(&lines, size)?.enumerate() {
                formatter.write_chunk(index, view.as_slice())?;
                count += 1;
            }
            Ok(count)
        }
        ChunkStrategy::SliceCopy | ChunkStrategy::Grouping => {
            let lines = source.read_all()?;
            let chunks = strategy.split(&lines, size)?;
            for (index, chunk) in chunks.iter().enumerate() {
                formatter.write_chunk(index, chunk)?;
            }
            Ok(chunks.len())
        }
    }
}

fn write_streamed<C>(chunks: C, formatter: &mut dyn OutputFormatter) -> Result<usize>
where
    C: Iterator<Item = Vec<io::Result<String>>>,
{
    let mut count = 0;
    for (index, chunk) in chunks.enumerate() {
        let lines = chunk
            .into_iter()
            .collect::<io::Result<Vec<String>>>()
            .context("Failed to read input")?;
        formatter.write_chunk(index, &lines)?;
        count += 1;
    }
    Ok(count)
}
