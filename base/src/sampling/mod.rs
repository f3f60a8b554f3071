//! Sampling

mod common;
mod discrete_distribution;

// Re-export
pub use common::*;
pub use discrete_distribution::*;
