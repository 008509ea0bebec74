//! Configuration for the completion engine.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::completion::probability::{DEFAULT_PENALTY, validate_penalty};
use crate::error::{Result, StubError};

/// Tuning knobs for [`CompletionEngine`](crate::completion::CompletionEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Number of suggestions to return.
    pub num_suggestions: usize,
    /// Geometric penalty per unit of distance, in `(0, 1]`.
    pub penalty: f64,
    /// Ceiling on the miss budget; `None` allows every stub position to miss.
    pub max_misses: Option<usize>,
    /// Corpus entries with a lower count are dropped when the engine is built.
    pub min_count: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            num_suggestions: 5,
            penalty: DEFAULT_PENALTY,
            max_misses: None,
            min_count: 0,
        }
    }
}

impl CompletionConfig {
    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        validate_penalty(self.penalty).map_err(|e| StubError::config(e.to_string()))
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: CompletionConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
