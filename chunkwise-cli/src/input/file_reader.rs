//! File reading utilities

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Line-oriented file reader
pub struct FileReader;

impl FileReader {
    /// Open a file as a lazy iterator over its lines
    pub fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(BufReader::new(file).lines())
    }

    /// Read every line of a file
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        Self::open_lines(path)?
            .collect::<std::io::Result<Vec<String>>>()
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }
}
