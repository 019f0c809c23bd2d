//! Seed types for initializing Game of Life grids.

use std::fs;
use std::path::Path;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Glider { origin: (0, 0) },
        }
    }
}

/// Predefined patterns for initialization.
///
/// Origins are `(row, column)` of the pattern's top-left bounding-box corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Explicit list of live `(row, column)` coordinates.
    Cells { cells: Vec<(i64, i64)> },
    /// 2x2 still life.
    Block { origin: (i64, i64) },
    /// Horizontal period-2 oscillator.
    Blinker { origin: (i64, i64) },
    /// South-east travelling glider.
    Glider { origin: (i64, i64) },
    /// Uniform random fill.
    Noise {
        /// Probability of each cell being alive (0.0-1.0).
        density: f64,
        /// Random seed.
        seed: u64,
    },
}

const BLOCK: [(i64, i64); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
const BLINKER: [(i64, i64); 3] = [(0, 0), (0, 1), (0, 2)];
const GLIDER: [(i64, i64); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

impl Seed {
    /// Generate the live coordinates for a `rows x columns` grid.
    ///
    /// Shapes are not clipped; coordinates may fall outside the grid.
    pub fn generate(&self, rows: usize, columns: usize) -> Vec<(i64, i64)> {
        match &self.pattern {
            Pattern::Cells { cells } => cells.clone(),
            Pattern::Block { origin } => translate(&BLOCK, *origin),
            Pattern::Blinker { origin } => translate(&BLINKER, *origin),
            Pattern::Glider { origin } => translate(&GLIDER, *origin),
            Pattern::Noise { density, seed } => noise(*density, *seed, rows, columns),
        }
    }

    /// Load a seed from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Offsets saturate, so an extreme origin stays off the grid.
fn translate(shape: &[(i64, i64)], (row, column): (i64, i64)) -> Vec<(i64, i64)> {
    shape
        .iter()
        .map(|&(r, c)| (r.saturating_add(row), c.saturating_add(column)))
        .collect()
}

fn noise(density: f64, seed: u64, rows: usize, columns: usize) -> Vec<(i64, i64)> {
    let clamped = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    if clamped != density {
        log::warn!("Noise density {} clamped to {}", density, clamped);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut cells = Vec::new();
    for r in 0..rows {
        for c in 0..columns {
            if rng.gen_bool(clamped) {
                cells.push((r as i64, c as i64));
            }
        }
    }
    cells
}
