//! Diffuse Area Light

use crate::geometry::*;
use crate::pbrt::*;
use crate::shapes::*;
use crate::spectrum::*;

/// A single emitting triangle radiating `intensity` from the side its normal
/// points to.
#[derive(Clone, Debug)]
pub struct AreaLight {
    /// Emitting geometry.
    pub triangle: Triangle,

    /// Emitted radiance.
    pub intensity: RGBSpectrum,

    /// Density of uniformly sampled positions with respect to area.
    pub pdf: Float,
}

impl AreaLight {
    /// Returns a new `AreaLight`.
    ///
    /// * `triangle`  - Emitting geometry.
    /// * `intensity` - Emitted radiance.
    pub fn new(triangle: Triangle, intensity: RGBSpectrum) -> Self {
        let area = triangle.area();
        if area <= 0.0 {
            warn!("Area light has a degenerate triangle");
        }
        let pdf = if area > 0.0 { 1.0 / area } else { 0.0 };
        Self {
            triangle,
            intensity,
            pdf,
        }
    }

    /// Sample a position on the emitter. Returns the radiance, the position
    /// and its density with respect to area.
    ///
    /// * `u` - The random sample point.
    pub fn sample_l(&self, u: &Point2f) -> (RGBSpectrum, Point3f, Float) {
        (self.intensity, self.triangle.sample(u), self.pdf)
    }

    /// Returns the emitter's normal.
    pub fn normal(&self) -> Normal3f {
        self.triangle.normal
    }

    /// Returns the emitter's surface area.
    pub fn area(&self) -> Float {
        self.triangle.area()
    }

    /// Returns the emitter's centroid.
    pub fn centroid(&self) -> Point3f {
        self.triangle.centroid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    #[test]
    fn pdf_is_inverse_area() {
        let tri = Triangle::new(
            Point3f::new(0.0, 2.0, 0.0),
            Point3f::new(2.0, 2.0, 0.0),
            Point3f::new(0.0, 2.0, 2.0),
        );
        let light = AreaLight::new(tri, RGBSpectrum::grey(10.0));
        let (l, p, pdf) = light.sample_l(&Point2f::new(0.3, 0.6));
        assert_eq!(l, RGBSpectrum::grey(10.0));
        assert!(approx_eq!(f32, pdf, 0.5));
        assert!(approx_eq!(f32, p.y, 2.0));
        assert_eq!(light.normal(), Normal3f::new(0.0, -1.0, 0.0));
    }
}
