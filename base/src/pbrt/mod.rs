//! Numeric helpers shared by the whole renderer

mod clamp;
mod common;

// Re-export
pub use clamp::*;
pub use common::*;
