//! Ray-scene intersection.

use crate::geometry::*;
use crate::material::*;
use crate::pbrt::*;
use crate::spectrum::*;
use std::sync::Arc;

/// Everything the shaders need to know about a ray-surface hit.
#[derive(Clone, Debug)]
pub struct Intersection {
    /// Hit point.
    pub p: Point3f,

    /// Distance along the ray.
    pub t: Float,

    /// Geometric normal facing `wo`.
    pub gn: Normal3f,

    /// Shading normal facing `wo`.
    pub sn: Normal3f,

    /// Outgoing direction (the negated ray direction).
    pub wo: Vector3f,

    /// Index of refraction of the medium the incoming ray travelled in.
    pub incident_eta: Float,

    /// Surface material. `None` for emitters.
    pub material: Option<ArcMaterial>,

    /// True if the hit primitive is a light emitter.
    pub is_light: bool,

    /// Emitted radiance if `is_light`.
    pub le: RGBSpectrum,

    /// Interpolated texture coordinates.
    pub uv: Point2f,

    /// Pixel inherited from the ray.
    pub pixel: Point2i,

    /// Transport event of the ray that produced the hit.
    pub ray_type: RayType,
}

impl Intersection {
    /// Build an intersection for a hit on an ordinary surface. Both normals
    /// are flipped to face the outgoing direction.
    ///
    /// * `ray`      - The ray that hit the surface.
    /// * `hit`      - Geometric details of the hit.
    /// * `material` - Surface material.
    pub fn surface(ray: &Ray, hit: &ShapeHit, material: &ArcMaterial) -> Self {
        let mut isect = Self::new(ray, hit);
        isect.material = Some(Arc::clone(material));
        isect
    }

    /// Build an intersection for a hit on an emitter.
    ///
    /// * `ray` - The ray that hit the emitter.
    /// * `hit` - Geometric details of the hit.
    /// * `le`  - Emitted radiance.
    pub fn emitter(ray: &Ray, hit: &ShapeHit, le: RGBSpectrum) -> Self {
        let mut isect = Self::new(ray, hit);
        isect.is_light = true;
        isect.le = le;
        isect
    }

    fn new(ray: &Ray, hit: &ShapeHit) -> Self {
        let wo = -ray.d;
        let n = hit.n.face_forward(&wo);
        Self {
            p: hit.p,
            t: hit.t,
            gn: n,
            sn: n,
            wo,
            incident_eta: ray.propagating_eta,
            material: None,
            is_light: false,
            le: RGBSpectrum::ZERO,
            uv: hit.uv,
            pixel: ray.pixel,
            ray_type: ray.ray_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit_below() -> (Ray, ShapeHit) {
        let ray = Ray::new(
            Point3f::new(0.0, 1.0, 0.0),
            Vector3f::new(0.0, -1.0, 0.0),
            RayType::SpecularTransmission,
        )
        .with_pixel(Point2i::new(5, 6))
        .with_eta(1.5);
        let hit = ShapeHit {
            t: 1.0,
            p: Point3f::zero(),
            n: Normal3f::new(0.0, -1.0, 0.0),
            uv: Point2f::new(0.25, 0.5),
        };
        (ray, hit)
    }

    #[test]
    fn normals_face_outgoing_direction() {
        let (ray, hit) = hit_below();
        let m: ArcMaterial = Arc::new(Material::from(Brdf::diffuse(RGBSpectrum::ONE)));
        let isect = Intersection::surface(&ray, &hit, &m);
        assert_eq!(isect.gn, Normal3f::new(0.0, 1.0, 0.0));
        assert_eq!(isect.sn, isect.gn);
        assert_eq!(isect.wo, Vector3f::new(0.0, 1.0, 0.0));
        assert!(!isect.is_light);
        assert!(isect.material.is_some());
    }

    #[test]
    fn inherits_ray_state() {
        let (ray, hit) = hit_below();
        let isect = Intersection::emitter(&ray, &hit, RGBSpectrum::grey(4.0));
        assert!(isect.is_light);
        assert_eq!(isect.le, RGBSpectrum::grey(4.0));
        assert_eq!(isect.pixel, Point2i::new(5, 6));
        assert_eq!(isect.incident_eta, 1.5);
        assert_eq!(isect.ray_type, RayType::SpecularTransmission);
        assert_eq!(isect.uv, Point2f::new(0.25, 0.5));
    }
}
