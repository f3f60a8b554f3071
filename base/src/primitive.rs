//! Geometric Primitives

use crate::geometry::*;
use crate::interaction::*;
use crate::material::*;
use std::sync::Arc;

/// GeometricPrimitive binds a shape to the material it is made of.
#[derive(Clone)]
pub struct GeometricPrimitive {
    /// The shape.
    pub shape: ArcShape,

    /// The material.
    pub material: ArcMaterial,
}

impl GeometricPrimitive {
    /// Create a new geometric primitive.
    ///
    /// * `shape`    - The shape.
    /// * `material` - The material.
    pub fn new(shape: ArcShape, material: ArcMaterial) -> Self {
        Self { shape, material }
    }

    /// Returns the intersection if the ray hits the primitive and shortens
    /// `ray.t_max` to the hit distance.
    ///
    /// * `ray` - The ray.
    pub fn intersect(&self, ray: &mut Ray) -> Option<Intersection> {
        let hit = self.shape.intersect(ray)?;
        ray.t_max = hit.t;
        Some(Intersection::surface(ray, &hit, &self.material))
    }

    /// Returns `true` if the ray hits the primitive.
    ///
    /// * `ray` - The ray.
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        self.shape.intersect_p(ray)
    }
}

/// Atomic reference counted `GeometricPrimitive`.
pub type ArcPrimitive = Arc<GeometricPrimitive>;
