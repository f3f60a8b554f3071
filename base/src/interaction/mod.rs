//! Interactions

mod intersection;

// Re-export
pub use intersection::*;
