//! Game of Life - Conway's B3/S23 cellular automaton on a bounded grid.
//!
//! This crate provides a fixed-size grid model and its generation-transition
//! algorithm. Edges are hard boundaries: cells outside the grid count as dead.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and seed patterns
//! - `compute`: Grid model, transition rule and generation history
//!
//! # Example
//!
//! ```rust
//! use game_of_life::Grid;
//!
//! let mut grid = Grid::new(3, 3)?;
//! grid.seed(&[(1, 0), (1, 1), (1, 2)])?;
//!
//! let next = grid.next_generation();
//! let live: Vec<_> = next.live_coordinates().collect();
//! assert_eq!(live, vec![(0, 1), (1, 1), (2, 1)]);
//! # Ok::<(), game_of_life::GridError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{GenerationStats, Grid, GridError, History};
pub use schema::{LiveCountPolicy, Pattern, Seed, SimulationConfig};
