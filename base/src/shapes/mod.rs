//! Shapes

mod sphere;
mod triangle;

// Re-export
pub use sphere::*;
pub use triangle::*;

use crate::pbrt::Float;

/// Hits closer than this to the ray origin are ignored.
pub const HIT_EPSILON: Float = 1e-4;
