//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use chunkwise_core::ChunkStrategy;
use clap::Subcommand;

pub mod bench;
pub mod generate_config;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Time every chunking strategy on the same source and compare
    Bench(bench::BenchArgs),

    /// Split input lines into chunks
    Split(split::SplitArgs),

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available chunking strategies
    Strategies,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Bench(args) => args.execute(),
            Commands::Split(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) {
        print!("{}", self.render());
    }

    fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Strategies => {
                out.push_str("Available chunking strategies:\n");
                for strategy in ChunkStrategy::ALL {
                    out.push_str(&format!(
                        "  {:<12} {}\n",
                        strategy.name(),
                        strategy.description()
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in OutputFormat::ALL {
                    out.push_str(&format!("  {:<12} {}\n", format, format.description()));
                }
            }
        }
        out
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization in the same process is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_strategies_names_every_strategy() {
        let listing = ListCommands::Strategies.render();
        for strategy in ChunkStrategy::ALL {
            assert!(listing.contains(strategy.name()), "{strategy}");
        }
    }

    #[test]
    fn test_list_formats() {
        let listing = ListCommands::Formats.render();
        assert!(listing.contains("text"));
        assert!(listing.contains("json"));
        assert!(listing.contains("markdown"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Strategies,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Strategies"));
    }
}
