//! Textures

use crate::geometry::*;
use crate::spectrum::*;
use std::sync::Arc;

/// Texture interface.
pub trait Texture {
    /// Evaluate the texture at the given surface texture coordinates.
    ///
    /// * `uv` - Texture coordinates.
    fn evaluate(&self, uv: &Point2f) -> RGBSpectrum;
}

/// Atomic reference counted `Texture`.
pub type ArcTexture = Arc<dyn Texture + Send + Sync>;

mod checkerboard;
mod image_map;

// Re-export
pub use checkerboard::*;
pub use image_map::*;
