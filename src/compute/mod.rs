//! Compute module - Grid model and generation stepping.

mod grid;
mod history;
mod rules;

pub use grid::*;
pub use history::*;
pub use rules::*;
