//! Configuration module

use crate::{error::CliError, output::OutputFormat};
use anyhow::{Context, Result};
use chunkwise_core::ChunkStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Chunk size used when neither flags nor config give one
pub const DEFAULT_CHUNK_SIZE: i64 = 1000;

/// Benchmark source length used when neither flags nor config give one
pub const DEFAULT_SOURCE_LEN: usize = 10_005;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Benchmark configuration
    #[serde(default)]
    pub benchmark: BenchmarkConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// Chunking-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum elements per chunk (must be positive)
    pub chunk_size: i64,

    /// Strategy used by the split command
    pub default_strategy: ChunkStrategy,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            default_strategy: ChunkStrategy::Sequence,
        }
    }
}

/// Benchmark-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Number of elements in the generated source (0..len)
    pub source_len: usize,

    /// Timed runs per strategy
    pub iterations: usize,

    /// Untimed runs per strategy before measuring
    pub warmup: usize,

    /// Strategies to compare
    pub strategies: Vec<ChunkStrategy>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            source_len: DEFAULT_SOURCE_LEN,
            iterations: 100,
            warmup: 10,
            strategies: ChunkStrategy::ALL.to_vec(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}
