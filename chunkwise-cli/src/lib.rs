//! chunkwise CLI library
//!
//! This library provides the command-line harness for the chunkwise
//! chunking strategies: timing comparisons, line splitting and config
//! generation.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod timing;

pub use error::{CliError, CliResult};
