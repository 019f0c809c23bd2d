//! Configuration types for Game of Life runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compute::GridError;

/// How seeding updates a grid's cached live-cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveCountPolicy {
    /// Count each cell that becomes alive once.
    #[default]
    Distinct,
    /// Take the number of supplied coordinates as the count, duplicates included.
    Supplied,
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of grid rows.
    pub rows: i64,
    /// Number of grid columns.
    pub columns: i64,
    /// Generations to run when no count is given on the command line.
    pub generations: u64,
    /// Live-count accounting used when seeding.
    #[serde(default)]
    pub live_count: LiveCountPolicy,
    /// Maximum number of generations kept in history (None = unbounded).
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            columns: 32,
            generations: 100,
            live_count: LiveCountPolicy::Distinct,
            history_limit: Some(64),
        }
    }
}

impl SimulationConfig {
    /// Total number of cells (0 if dimensions are invalid).
    #[inline]
    pub fn grid_size(&self) -> usize {
        match (usize::try_from(self.rows), usize::try_from(self.columns)) {
            (Ok(r), Ok(c)) => r.saturating_mul(c),
            _ => 0,
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 0 || self.columns < 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::InvalidHistoryLimit);
        }
        if self.grid_size() == 0 {
            log::warn!(
                "Grid {}x{} has no cells; every generation will be empty",
                self.rows,
                self.columns
            );
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions must be non-negative, got {rows}x{columns}")]
    InvalidDimensions { rows: i64, columns: i64 },
    #[error("History limit must be non-zero")]
    InvalidHistoryLimit,
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}
