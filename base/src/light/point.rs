//! Point Light Source

use crate::geometry::*;
use crate::spectrum::*;

/// Implements an isotropic point light source that emits the same amount of
/// light in all directions.
#[derive(Clone, Debug)]
pub struct PointLight {
    /// Position.
    pub p_light: Point3f,

    /// Intensity.
    pub intensity: RGBSpectrum,
}

impl PointLight {
    /// Returns a new `PointLight`.
    ///
    /// * `p_light`   - Position.
    /// * `intensity` - Intensity.
    pub fn new(p_light: Point3f, intensity: RGBSpectrum) -> Self {
        Self { p_light, intensity }
    }

    /// Returns the emitted radiance and the light position.
    pub fn sample_l(&self) -> (RGBSpectrum, Point3f) {
        (self.intensity, self.p_light)
    }
}
