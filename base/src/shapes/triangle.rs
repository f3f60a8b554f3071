//! Triangles

use super::HIT_EPSILON;
use crate::geometry::*;
use crate::pbrt::*;
use crate::sampling::*;

/// Rays closer than this to the triangle's plane count as parallel.
const PARALLEL_EPSILON: Float = 1e-6;

/// A single triangle with per-vertex texture coordinates.
#[derive(Clone, Debug)]
pub struct Triangle {
    /// Vertices.
    pub v: [Point3f; 3],

    /// Texture coordinates of the vertices.
    pub uv: [Point2f; 3],

    /// Unit normal `(v1 − v0) × (v2 − v0)`.
    pub normal: Normal3f,

    /// Edge `v1 − v0`.
    edge1: Vector3f,

    /// Edge `v2 − v0`.
    edge2: Vector3f,

    /// Surface area.
    area: Float,

    /// World space bounds.
    bounds: Bounds3f,
}

impl Triangle {
    /// Create a new triangle. Texture coordinates default to `(0, 0)`,
    /// `(1, 0)` and `(0, 1)`.
    ///
    /// * `v0` - First vertex.
    /// * `v1` - Second vertex.
    /// * `v2` - Third vertex.
    pub fn new(v0: Point3f, v1: Point3f, v2: Point3f) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let cross = edge1.cross(&edge2);
        let len = cross.length();
        let normal = if len > 0.0 { cross / len } else { cross };

        Self {
            v: [v0, v1, v2],
            uv: [Point2f::new(0.0, 0.0), Point2f::new(1.0, 0.0), Point2f::new(0.0, 1.0)],
            normal,
            edge1,
            edge2,
            area: 0.5 * len,
            bounds: Bounds3f::new(v0, v1).union_point(&v2),
        }
    }

    /// Set per-vertex texture coordinates.
    ///
    /// * `uv` - Texture coordinates for `v0`, `v1` and `v2`.
    pub fn with_uvs(mut self, uv: [Point2f; 3]) -> Self {
        self.uv = uv;
        self
    }

    /// Returns the centroid.
    pub fn centroid(&self) -> Point3f {
        (self.v[0] + self.v[1] + self.v[2]) / 3.0
    }

    /// Uniformly sample a point on the surface. The density with respect to
    /// area is `1 / area`.
    ///
    /// * `u` - The random sample point.
    pub fn sample(&self, u: &Point2f) -> Point3f {
        let b = uniform_sample_triangle(u);
        let b2 = 1.0 - b.x - b.y;
        Point3f::from(
            b.x * Vector3f::from(self.v[0])
                + b.y * Vector3f::from(self.v[1])
                + b2 * Vector3f::from(self.v[2]),
        )
    }
}

impl Shape for Triangle {
    /// Möller-Trumbore ray-triangle intersection.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &Ray) -> Option<ShapeHit> {
        if !self.bounds.intersect_p(r) {
            return None;
        }

        if abs(self.normal.dot(&r.d)) < PARALLEL_EPSILON {
            return None;
        }

        // Solve o − v0 = −t d + u e1 + v e2 by Cramer's rule.
        let h = r.d.cross(&self.edge2);
        let a = self.edge1.dot(&h);
        if abs(a) < PARALLEL_EPSILON * PARALLEL_EPSILON {
            return None;
        }
        let f = 1.0 / a;
        let s = r.o - self.v[0];
        let u = f * s.dot(&h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(&self.edge1);
        let v = f * r.d.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * self.edge2.dot(&q);
        if t <= HIT_EPSILON || t >= r.t_max {
            return None;
        }

        let w = 1.0 - u - v;
        let uv = Point2f::new(
            w * self.uv[0].x + u * self.uv[1].x + v * self.uv[2].x,
            w * self.uv[0].y + u * self.uv[1].y + v * self.uv[2].y,
        );

        Some(ShapeHit {
            t,
            p: r.at(t),
            n: self.normal,
            uv,
        })
    }

    fn area(&self) -> Float {
        self.area
    }
}
