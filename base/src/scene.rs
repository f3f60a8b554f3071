//! Scene

use crate::geometry::*;
use crate::interaction::*;
use crate::light::*;
use crate::pbrt::*;
use crate::primitive::*;
use crate::shapes::*;

/// Scene.
///
/// Geometry is tested linearly; emitting triangles of area lights take part
/// in `trace` but never occlude shadow rays.
pub struct Scene {
    /// Light scattering primitives.
    pub primitives: Vec<ArcPrimitive>,

    /// All light sources in the scene, in insertion order.
    lights: Vec<Light>,
}

impl Scene {
    /// Creates a new `Scene`.
    ///
    /// * `primitives` - Light scattering primitives.
    /// * `lights`     - All light sources in the scene.
    pub fn new(primitives: Vec<ArcPrimitive>, lights: Vec<Light>) -> Self {
        let count = |t: LightType| lights.iter().filter(|l| l.get_type().matches(t)).count();
        info!(
            "Scene: {} primitives, {} lights ({} ambient, {} point, {} area)",
            primitives.len(),
            lights.len(),
            count(LightType::AMBIENT_LIGHT),
            count(LightType::DELTA_POSITION_LIGHT),
            count(LightType::AREA_LIGHT),
        );

        Self { primitives, lights }
    }

    /// Returns the lights in a stable order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Traces the ray into the scene and returns the nearest intersection.
    /// Hits on area light emitters are flagged with their radiance.
    ///
    /// * `ray` - The ray to trace.
    pub fn trace(&self, ray: &Ray) -> Option<Intersection> {
        let mut r = *ray;
        let mut nearest: Option<Intersection> = None;

        for primitive in self.primitives.iter() {
            if let Some(isect) = primitive.intersect(&mut r) {
                nearest = Some(isect);
            }
        }

        for light in self.lights.iter() {
            if let Light::Area(al) = light {
                if let Some(hit) = al.triangle.intersect(&r) {
                    r.t_max = hit.t;
                    nearest = Some(Intersection::emitter(&r, &hit, al.intensity));
                }
            }
        }

        nearest
    }

    /// Returns true if nothing occludes the ray within `(0, max_distance)`.
    ///
    /// * `ray`          - The shadow ray.
    /// * `max_distance` - Distance to the light.
    pub fn visibility(&self, ray: &Ray, max_distance: Float) -> bool {
        if !(max_distance > 0.0) {
            return true;
        }
        let r = ray.with_t_max(max_distance);
        !self.primitives.iter().any(|p| p.intersect_p(&r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::*;
    use crate::spectrum::*;
    use std::sync::Arc;

    fn quad_floor(y: Float) -> Vec<ArcPrimitive> {
        let m: ArcMaterial = Arc::new(Material::from(Brdf::diffuse(RGBSpectrum::grey(0.5))));
        let a = Point3f::new(-10.0, y, -10.0);
        let b = Point3f::new(10.0, y, -10.0);
        let c = Point3f::new(10.0, y, 10.0);
        let d = Point3f::new(-10.0, y, 10.0);
        vec![
            Arc::new(GeometricPrimitive::new(Arc::new(Triangle::new(a, c, b)), Arc::clone(&m))),
            Arc::new(GeometricPrimitive::new(Arc::new(Triangle::new(a, d, c)), m)),
        ]
    }

    fn ceiling_light(y: Float) -> Light {
        Light::from(AreaLight::new(
            Triangle::new(
                Point3f::new(-1.0, y, -1.0),
                Point3f::new(1.0, y, -1.0),
                Point3f::new(0.0, y, 1.0),
            ),
            RGBSpectrum::grey(5.0),
        ))
    }

    #[test]
    fn trace_returns_nearest() {
        let mut primitives = quad_floor(0.0);
        primitives.extend(quad_floor(1.0));
        let scene = Scene::new(primitives, vec![]);
        let ray = Ray::new(Point3f::new(0.3, 5.0, 0.2), Vector3f::new(0.0, -1.0, 0.0), RayType::Camera);
        let isect = scene.trace(&ray).unwrap();
        assert!((isect.p.y - 1.0).abs() < 1e-4);
        assert!(!isect.is_light);
    }

    #[test]
    fn trace_flags_light_hits() {
        let scene = Scene::new(quad_floor(0.0), vec![ceiling_light(2.0)]);
        let up = Ray::new(Point3f::new(0.0, 1.0, 0.0), Vector3f::new(0.0, 1.0, 0.0), RayType::DiffuseReflection);
        let isect = scene.trace(&up).unwrap();
        assert!(isect.is_light);
        assert_eq!(isect.le, RGBSpectrum::grey(5.0));
        assert!(isect.material.is_none());

        let down = Ray::new(Point3f::new(0.0, 1.0, 0.0), Vector3f::new(0.0, -1.0, 0.0), RayType::DiffuseReflection);
        assert!(!scene.trace(&down).unwrap().is_light);

        let sideways = Ray::new(Point3f::new(0.0, 1.0, 0.0), Vector3f::new(1.0, 0.0, 0.0), RayType::Camera);
        assert!(scene.trace(&sideways).is_none());
    }

    #[test]
    fn visibility_ignores_emitters_and_respects_distance() {
        let scene = Scene::new(quad_floor(0.0), vec![ceiling_light(2.0)]);
        let up = Ray::new(Point3f::new(0.0, 1.0, 0.0), Vector3f::new(0.0, 1.0, 0.0), RayType::Shadow);
        assert!(scene.visibility(&up, 5.0));

        let down = Ray::new(Point3f::new(0.0, 1.0, 0.0), Vector3f::new(0.0, -1.0, 0.0), RayType::Shadow);
        assert!(!scene.visibility(&down, 5.0));
        assert!(scene.visibility(&down, 0.5));
    }

    #[test]
    fn lights_keep_insertion_order() {
        let lights = vec![
            Light::from(AmbientLight::new(RGBSpectrum::grey(0.1))),
            ceiling_light(2.0),
            Light::from(PointLight::new(Point3f::zero(), RGBSpectrum::ONE)),
        ];
        let scene = Scene::new(vec![], lights);
        assert_eq!(scene.lights().len(), 3);
        assert_eq!(scene.lights()[0].get_type(), LightType::AMBIENT_LIGHT);
        assert_eq!(scene.lights()[1].get_type(), LightType::AREA_LIGHT);
        assert_eq!(scene.lights()[2].get_type(), LightType::DELTA_POSITION_LIGHT);
    }
}
