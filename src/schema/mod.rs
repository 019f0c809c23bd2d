//! Schema module - Configuration and seed patterns for Game of Life runs.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
