//! Generation history - Drives a grid forward and keeps past generations.

use std::collections::VecDeque;
use std::mem;

use crate::schema::{Seed, SimulationConfig};

use super::{Grid, GridError};

/// Generation-indexed store of grids.
///
/// The latest grid is always present. Older generations are kept up to the
/// optional limit; generation numbers stay absolute when old grids are dropped.
#[derive(Debug, Clone)]
pub struct History {
    current: Grid,
    /// Past generations, oldest first.
    past: VecDeque<Grid>,
    /// Generation number of `current`.
    generation: u64,
    /// Maximum number of stored grids including `current`.
    limit: Option<usize>,
    /// Whether the last step left the grid unchanged.
    stable: bool,
}

impl History {
    /// Start a history at generation 0.
    pub fn new(initial: Grid) -> Self {
        Self {
            current: initial,
            past: VecDeque::new(),
            generation: 0,
            limit: None,
            stable: false,
        }
    }

    /// Build the initial grid from a seed and configuration.
    pub fn from_seed(seed: &Seed, config: &SimulationConfig) -> Result<Self, GridError> {
        let mut grid = Grid::new(config.rows, config.columns)?;
        let cells = seed.generate(grid.rows(), grid.columns());
        grid.seed_with_policy(&cells, config.live_count)?;

        let history = Self::new(grid);
        Ok(match config.history_limit {
            Some(limit) => history.with_limit(limit),
            None => history,
        })
    }

    /// Keep at most `limit` grids (at least the latest one).
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.max(1));
        self.trim();
        self
    }

    /// Compute the next generation from the latest one.
    pub fn advance(&mut self) -> GenerationStats {
        let next = self.current.next_generation();
        let previous = mem::replace(&mut self.current, next);
        self.generation += 1;
        self.stable = previous == self.current;

        let stats = GenerationStats::between(&previous, &self.current, self.generation);
        log::debug!(
            "Generation {}: {} live (+{} -{})",
            stats.generation,
            stats.live_cells,
            stats.births,
            stats.deaths
        );

        self.past.push_back(previous);
        self.trim();
        stats
    }

    /// Advance the specified number of generations.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Latest grid.
    #[inline]
    pub fn latest(&self) -> &Grid {
        &self.current
    }

    /// Generation number of the latest grid.
    #[inline]
    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    /// Grid for an absolute generation number, if still stored.
    pub fn generation(&self, generation: u64) -> Option<&Grid> {
        if generation == self.generation {
            return Some(&self.current);
        }
        let back = usize::try_from(self.generation.checked_sub(generation)?).ok()?;
        self.past
            .len()
            .checked_sub(back)
            .and_then(|i| self.past.get(i))
    }

    /// Number of grids currently stored.
    pub fn stored(&self) -> usize {
        self.past.len() + 1
    }

    /// Whether the latest generation equals the one before it.
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            while self.past.len() + 1 > limit {
                self.past.pop_front();
            }
        }
    }
}

/// Per-generation statistics for monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub live_cells: usize,
    pub births: usize,
    pub deaths: usize,
}

impl GenerationStats {
    /// Statistics for a grid with no predecessor.
    pub fn initial(grid: &Grid) -> Self {
        Self {
            generation: 0,
            live_cells: grid.live_cells(),
            births: 0,
            deaths: 0,
        }
    }

    /// Compare two consecutive grids of equal dimensions.
    pub fn between(previous: &Grid, next: &Grid, generation: u64) -> Self {
        let mut births = 0;
        let mut deaths = 0;
        for (&was, &is) in previous.cells().iter().zip(next.cells()) {
            match (was, is) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
        }

        Self {
            generation,
            live_cells: next.live_cells(),
            births,
            deaths,
        }
    }
}
