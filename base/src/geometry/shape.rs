//! Shapes

use super::{Normal3f, Point2f, Point3f, Ray};
use crate::pbrt::*;
use std::sync::Arc;

/// Geometric details of a single ray-shape intersection.
#[derive(Copy, Clone, Debug)]
pub struct ShapeHit {
    /// The parameter along the ray where intersection occurred.
    pub t: Float,

    /// Hit point.
    pub p: Point3f,

    /// Unit surface normal. Not yet oriented against the ray.
    pub n: Normal3f,

    /// Surface texture coordinates.
    pub uv: Point2f,
}

/// Shape common functions
pub trait Shape {
    /// Returns geometric details if a ray intersects the shape within
    /// `(0, r.t_max)`. If there is no intersection, `None` is returned.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &Ray) -> Option<ShapeHit>;

    /// Returns `true` if a ray-shape intersection succeeds; otherwise `false`.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool {
        self.intersect(r).is_some()
    }

    /// Returns the surface area of the shape.
    fn area(&self) -> Float;
}

/// Atomic reference counted `Shape`.
pub type ArcShape = Arc<dyn Shape + Send + Sync>;
