//! Integrator

mod renderer;

use crate::interaction::*;
use crate::rng::RNG;
use crate::spectrum::*;

// Re-export.
pub use renderer::*;

/// Shader interface. A shader turns the result of tracing a ray into the
/// radiance travelling back along it.
pub trait Shader: Send + Sync {
    /// Returns the radiance leaving the intersection towards the ray origin,
    /// or the background radiance when the ray escaped.
    ///
    /// * `isect` - The intersection, `None` if the ray hit nothing.
    /// * `depth` - Recursion depth; 0 for primary rays.
    /// * `rng`   - Random stream owned by the caller.
    fn shade(&self, isect: Option<&Intersection>, depth: usize, rng: &mut RNG) -> RGBSpectrum;
}
