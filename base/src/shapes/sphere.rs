//! Spheres

use super::HIT_EPSILON;
use crate::geometry::*;
use crate::pbrt::*;

/// A full sphere.
#[derive(Clone, Debug)]
pub struct Sphere {
    /// Center.
    pub center: Point3f,

    /// Radius.
    pub radius: Float,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// * `center` - Center.
    /// * `radius` - Radius.
    pub fn new(center: Point3f, radius: Float) -> Self {
        Self { center, radius }
    }
}

impl Shape for Sphere {
    fn intersect(&self, r: &Ray) -> Option<ShapeHit> {
        // |o + t d − c|² = radius² with |d| = 1.
        let oc = r.o - self.center;
        let b = oc.dot(&r.d);
        let c = oc.length_squared() - self.radius * self.radius;
        let discrim = b * b - c;
        if discrim < 0.0 {
            return None;
        }

        let root = discrim.sqrt();
        let t = [-b - root, -b + root]
            .into_iter()
            .find(|&t| t > HIT_EPSILON && t < r.t_max)?;

        let p = r.at(t);
        let n = (p - self.center) / self.radius;
        let uv = Point2f::new(
            0.5 + n.z.atan2(n.x) / TWO_PI,
            0.5 + clamp(n.y, -1.0, 1.0).asin() / PI,
        );

        Some(ShapeHit { t, p, n, uv })
    }

    fn area(&self) -> Float {
        2.0 * TWO_PI * self.radius * self.radius
    }
}
