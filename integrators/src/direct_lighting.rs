//! Direct Lighting

use base::geometry::*;
use base::interaction::*;
use base::light::*;
use base::material::*;
use base::pbrt::*;
use base::rng::*;
use base::sampling::*;
use base::scene::*;
use base::spectrum::*;

/// Squared distances below this make a light useless for ranking.
const MIN_DISTANCE_SQUARED: Float = 1e-6;

/// Cosines at or below this reject area light samples.
const AREA_COS_THRESHOLD: Float = 1e-4;

/// Estimate the radiance reflected at a surface point from light arriving
/// directly from the emitters, picking lights according to `mode`.
///
/// * `scene`    - The scene.
/// * `isect`    - A surface intersection (not a light).
/// * `material` - Material at the intersection.
/// * `rng`      - Random stream.
/// * `mode`     - Light sampling policy.
pub fn direct_lighting(
    scene: &Scene,
    isect: &Intersection,
    material: &Material,
    rng: &mut RNG,
    mode: LightSampleMode,
) -> RGBSpectrum {
    let lights = scene.lights();
    let n_lights = lights.len();
    if n_lights == 0 {
        return RGBSpectrum::ZERO;
    }

    match mode {
        LightSampleMode::AllLights => lights
            .iter()
            .map(|light| sample_light(scene, light, isect, material, rng))
            .sum(),

        LightSampleMode::UniformOne => {
            let idx = min((rng.uniform_float() * n_lights as Float) as usize, n_lights - 1);
            sample_light(scene, &lights[idx], isect, material, rng) * n_lights as Float
        }

        LightSampleMode::ImportanceOne => {
            sample_one_light(scene, isect, material, rng, estimate_contribution)
        }

        LightSampleMode::ImportanceOneNoDistance => {
            sample_one_light(scene, isect, material, rng, estimate_contribution_no_distance)
        }

        LightSampleMode::DistanceOne => sample_one_light(scene, isect, material, rng, estimate_distance),

        LightSampleMode::DistanceSquaredOne => {
            sample_one_light(scene, isect, material, rng, estimate_distance_squared)
        }
    }
}

/// Pick one light from a discrete distribution proportional to `weight` and
/// return its contribution divided by the probability of picking it.
///
/// * `scene`    - The scene.
/// * `isect`    - The surface intersection.
/// * `material` - Material at the intersection.
/// * `rng`      - Random stream.
/// * `weight`   - Ranks a light for the shading point.
fn sample_one_light<F>(
    scene: &Scene,
    isect: &Intersection,
    material: &Material,
    rng: &mut RNG,
    weight: F,
) -> RGBSpectrum
where
    F: Fn(&Light, &Intersection) -> Float,
{
    let lights = scene.lights();
    let weights: Vec<Float> = lights.iter().map(|light| weight(light, isect)).collect();

    match DiscreteDistribution::new(&weights) {
        Some(distrib) => {
            let (idx, pmf) = distrib.sample(rng.uniform_float());
            sample_light(scene, &lights[idx], isect, material, rng) / pmf
        }
        None => RGBSpectrum::ZERO,
    }
}

/// Returns the contribution of a single light.
///
/// * `scene`    - The scene.
/// * `light`    - The light.
/// * `isect`    - The surface intersection.
/// * `material` - Material at the intersection.
/// * `rng`      - Random stream.
fn sample_light(
    scene: &Scene,
    light: &Light,
    isect: &Intersection,
    material: &Material,
    rng: &mut RNG,
) -> RGBSpectrum {
    match light {
        Light::Ambient(l) => direct_ambient_light(l, material.brdf()),
        Light::Point(l) => direct_point_light(l, scene, isect, material),
        Light::Area(l) => {
            let u = rng.uniform_point2f();
            direct_area_light(l, scene, isect, material, &u)
        }
    }
}

/// Weight proportional to the irradiance a light would deliver, with area
/// lights approximated by their centroid.
///
/// * `light` - The light.
/// * `isect` - The surface intersection.
pub fn estimate_contribution(light: &Light, isect: &Intersection) -> Float {
    match light {
        Light::Ambient(_) => 0.0,
        Light::Point(l) => {
            let v = l.p_light - isect.p;
            let dist2 = v.length_squared();
            if dist2 < MIN_DISTANCE_SQUARED {
                return 0.0;
            }
            let cos_s = v.normalize().dot(&isect.sn);
            if cos_s <= 0.0 {
                return 0.0;
            }
            l.intensity.y() * cos_s / dist2
        }
        Light::Area(l) => {
            let v = l.centroid() - isect.p;
            let dist2 = v.length_squared();
            if dist2 < MIN_DISTANCE_SQUARED {
                return 0.0;
            }
            area_light_weight(l, &v.normalize(), isect) / dist2
        }
    }
}

/// `estimate_contribution` without the inverse-square falloff.
///
/// * `light` - The light.
/// * `isect` - The surface intersection.
pub fn estimate_contribution_no_distance(light: &Light, isect: &Intersection) -> Float {
    match light {
        Light::Ambient(_) => 0.0,
        Light::Point(l) => {
            let cos_s = (l.p_light - isect.p).normalize().dot(&isect.sn);
            if cos_s > 0.0 {
                l.intensity.y() * cos_s
            } else {
                0.0
            }
        }
        Light::Area(l) => area_light_weight(l, &(l.centroid() - isect.p).normalize(), isect),
    }
}

/// Weight equal to the inverse distance to the light.
///
/// * `light` - The light.
/// * `isect` - The surface intersection.
pub fn estimate_distance(light: &Light, isect: &Intersection) -> Float {
    match light.reference_point() {
        Some(p) => {
            let dist = p.distance(&isect.p);
            if dist > 0.0 {
                1.0 / dist
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}

/// Weight equal to the inverse squared distance to the light.
///
/// * `light` - The light.
/// * `isect` - The surface intersection.
pub fn estimate_distance_squared(light: &Light, isect: &Intersection) -> Float {
    let w = estimate_distance(light, isect);
    w * w
}

/// Area light weight without distance falloff.
fn area_light_weight(light: &AreaLight, dir: &Vector3f, isect: &Intersection) -> Float {
    let cos_s = dir.dot(&isect.sn);
    let cos_l = -dir.dot(&light.normal());
    if cos_s <= 0.0 || cos_l <= 0.0 || dir.has_nans() {
        return 0.0;
    }
    light.intensity.y() * cos_s * cos_l * light.area()
}

/// Returns the ambient term `Ka * L`.
///
/// * `light` - The ambient light.
/// * `brdf`  - Lobe weights at the surface.
pub fn direct_ambient_light(light: &AmbientLight, brdf: &Brdf) -> RGBSpectrum {
    if brdf.ka.is_black() {
        RGBSpectrum::ZERO
    } else {
        brdf.ka * light.sample_l()
    }
}

/// Returns the diffuse radiance from a point light, `L * Kd * cos / d^2`,
/// or black if the light is behind the surface or occluded.
///
/// * `light`    - The point light.
/// * `scene`    - The scene.
/// * `isect`    - The surface intersection.
/// * `material` - Material at the intersection.
pub fn direct_point_light(
    light: &PointLight,
    scene: &Scene,
    isect: &Intersection,
    material: &Material,
) -> RGBSpectrum {
    let kd = material.diffuse(&isect.uv);
    if kd.is_black() {
        return RGBSpectrum::ZERO;
    }

    let (l, p_light) = light.sample_l();
    let to_light = p_light - isect.p;
    let distance = to_light.length();
    let dir = to_light.normalize();
    let cos_l = dir.dot(&isect.sn);
    if !(cos_l > 0.0) {
        return RGBSpectrum::ZERO;
    }

    if !unoccluded(scene, isect, &dir, distance) {
        return RGBSpectrum::ZERO;
    }

    let mut color = l * kd * cos_l;
    if distance > 0.0 {
        color /= distance * distance;
    }
    color
}

/// Returns the diffuse radiance from one position sampled on an area light,
/// `L * Kd * cos_s * cos_l / (pdf * d^2)`, or black for grazing or occluded
/// samples.
///
/// * `light`    - The area light.
/// * `scene`    - The scene.
/// * `isect`    - The surface intersection.
/// * `material` - Material at the intersection.
/// * `u`        - Sample used to pick a position on the emitter.
pub fn direct_area_light(
    light: &AreaLight,
    scene: &Scene,
    isect: &Intersection,
    material: &Material,
    u: &Point2f,
) -> RGBSpectrum {
    let kd = material.diffuse(&isect.uv);
    if kd.is_black() {
        return RGBSpectrum::ZERO;
    }

    let (l, p_light, pdf) = light.sample_l(u);
    if !(pdf > 0.0) {
        return RGBSpectrum::ZERO;
    }

    let to_light = p_light - isect.p;
    let distance = to_light.length();
    let dir = to_light.normalize();
    let cos_s = dir.dot(&isect.sn);
    let cos_l = -dir.dot(&light.normal());
    if !(cos_s > AREA_COS_THRESHOLD && cos_l > AREA_COS_THRESHOLD) {
        return RGBSpectrum::ZERO;
    }

    if !unoccluded(scene, isect, &dir, distance) {
        return RGBSpectrum::ZERO;
    }

    let mut color = l * kd * cos_s / pdf;
    if distance > 0.0 {
        color /= distance * distance;
    }
    color * cos_l
}

/// Cast a shadow ray towards a light at `distance` along `dir`.
fn unoccluded(scene: &Scene, isect: &Intersection, dir: &Vector3f, distance: Float) -> bool {
    let shadow = Ray::new(isect.p, *dir, RayType::Shadow)
        .with_pixel(isect.pixel)
        .adjust_origin(&isect.gn);
    scene.visibility(&shadow, distance - EPSILON)
}
