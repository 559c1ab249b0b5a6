use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::SIMILARITY_THRESHOLD;

/// Comparison parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonParams {
    /// Similarity percentage at or above which a pair counts as a match
    pub threshold: f64,
    /// Shortest accepted input, after trimming
    pub min_len: usize,
    /// Longest accepted input, after trimming
    pub max_len: usize,
    /// Character used to right-pad the shorter string for display
    pub pad: char,
}

impl Default for ComparisonParams {
    fn default() -> Self {
        Self {
            threshold: SIMILARITY_THRESHOLD,
            min_len: 6,
            max_len: 10,
            pad: ' ',
        }
    }
}

impl ComparisonParams {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(Error::invalid_argument("threshold", self.threshold));
        }
        if self.min_len == 0 {
            return Err(Error::invalid_argument("min_len", self.min_len));
        }
        if self.min_len > self.max_len {
            return Err(Error::invalid_argument(
                "max_len",
                format!("{} (below min_len {})", self.max_len, self.min_len),
            ));
        }
        Ok(())
    }

    /// Load and validate parameters from a JSON file. Missing fields take
    /// their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let params: ComparisonParams = serde_json::from_str(&raw)?;
        params.validate()?;
        info!("Loaded comparison parameters from {:?}", path);
        Ok(params)
    }
}
