//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Lines read one at a time from the input
pub type LineIter = Box<dyn Iterator<Item = io::Result<String>>>;

/// Where input lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// Files, read in order
    Files(Vec<PathBuf>),
}

impl InputSource {
    /// Resolve glob patterns; no patterns means stdin
    pub fn from_patterns(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            Ok(InputSource::Stdin)
        } else {
            Ok(InputSource::Files(resolve_patterns(patterns)?))
        }
    }

    /// Lazily read every line from the source
    pub fn lines(&self) -> Result<LineIter> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock().lines())),
            InputSource::Files(paths) => {
                // Open everything up front so a missing file fails before any output
                let readers = paths
                    .iter()
                    .map(|path| FileReader::open_lines(path))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Box::new(readers.into_iter().flatten()))
            }
        }
    }

    /// Read every line into memory
    pub fn read_all(&self) -> Result<Vec<String>> {
        match self {
            InputSource::Stdin => Ok(self.lines()?.collect::<io::Result<Vec<String>>>()?),
            InputSource::Files(paths) => {
                let mut all = Vec::new();
                for path in paths {
                    all.extend(FileReader::read_lines(path)?);
                }
                Ok(all)
            }
        }
    }
}
