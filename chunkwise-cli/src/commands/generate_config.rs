//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!("   chunkwise bench -c {}", self.output.display());
        println!("   chunkwise split -c {} -i input.txt", self.output.display());

        Ok(())
    }

    /// Default configuration with comments
    pub fn template() -> &'static str {
        r#"# chunkwise configuration

[chunking]
# Maximum elements per chunk; must be positive
chunk_size = 1000

# Strategy used by `chunkwise split`
# One of: slice-copy, sequence, grouping, views, batching
default_strategy = "sequence"

[benchmark]
# The benchmark source is the integers 0..source_len
source_len = 10005

# Timed runs per strategy
iterations = 100

# Untimed runs per strategy before measuring
warmup = 10

# Strategies compared by `chunkwise bench`, in report order
strategies = ["slice-copy", "sequence", "grouping", "views", "batching"]

[output]
# One of: text, json, markdown
format = "text"

# Indent JSON output
pretty_json = true
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let parsed: CliConfig = toml::from_str(GenerateConfigArgs::template()).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("chunkwise.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());

        let loaded = CliConfig::load(&output_path).unwrap();
        assert_eq!(loaded.chunking.chunk_size, 1000);
    }

    #[test]
    fn test_execute_reports_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/chunkwise.toml"),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
