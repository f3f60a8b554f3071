//! Path Tracer

use crate::direct_lighting::*;
use base::geometry::*;
use base::integrator::*;
use base::interaction::*;
use base::light::*;
use base::material::*;
use base::pbrt::*;
use base::rng::*;
use base::sampling::*;
use base::scene::*;
use base::spectrum::*;

/// Settings for `PathTracer`.
#[derive(Copy, Clone, Debug)]
pub struct PathTracerConfig {
    /// Radiance returned by rays that leave the scene.
    pub background: RGBSpectrum,

    /// Light sampling policy for the direct term.
    pub light_sample_mode: LightSampleMode,

    /// Depth below which the recursive branch always runs.
    pub min_depth: usize,

    /// Probability of continuing at or beyond `min_depth`.
    pub continue_prob: Float,

    /// Depth at and beyond which only the direct term is added.
    pub max_depth: usize,
}

impl Default for PathTracerConfig {
    fn default() -> Self {
        Self {
            background: RGBSpectrum::new(0.0, 0.0, 0.2),
            light_sample_mode: LightSampleMode::AllLights,
            min_depth: 1,
            continue_prob: 0.2,
            max_depth: 64,
        }
    }
}

/// The lobes a path can scatter into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lobe {
    SpecularReflection,
    SpecularTransmission,
    DiffuseReflection,
}

/// Discrete distribution over the specular reflection, specular
/// transmission and diffuse lobes, proportional to the luminance of
/// `Ks`, `Kt` and `Kd`.
#[derive(Copy, Clone, Debug)]
pub struct LobeDistribution {
    /// Lobe probabilities.
    pub pdf: [Float; 3],

    /// Cumulative lobe probabilities.
    pub cdf: [Float; 3],
}

impl LobeDistribution {
    /// Returns the lobe distribution for the given weights or `None` if all
    /// lobes have zero luminance.
    ///
    /// * `brdf` - Lobe weights.
    pub fn new(brdf: &Brdf) -> Option<Self> {
        let w = [brdf.ks.y(), brdf.kt.y(), brdf.kd.y()];
        let sum: Float = w.iter().sum();
        if !(sum > 0.0) {
            return None;
        }

        let pdf = [w[0] / sum, w[1] / sum, w[2] / sum];
        let cdf = [pdf[0], pdf[0] + pdf[1], pdf[0] + pdf[1] + pdf[2]];
        Some(Self { pdf, cdf })
    }

    /// Select a lobe with the uniform sample `u`. Returns the lobe and its
    /// probability, or `None` when no eligible lobe covers `u`. A diffuse
    /// lobe is never selected for an intersection reached by a diffuse ray.
    ///
    /// * `brdf`     - Lobe weights.
    /// * `u`        - Uniform sample in [0, 1).
    /// * `incoming` - Type of the ray that reached the intersection.
    pub fn select(&self, brdf: &Brdf, u: Float, incoming: RayType) -> Option<(Lobe, Float)> {
        if !brdf.ks.is_black() && u < self.cdf[0] {
            Some((Lobe::SpecularReflection, self.pdf[0]))
        } else if !brdf.kt.is_black() && u < self.cdf[1] {
            Some((Lobe::SpecularTransmission, self.pdf[1]))
        } else if !brdf.kd.is_black() && incoming != RayType::DiffuseReflection {
            Some((Lobe::DiffuseReflection, self.pdf[2]))
        } else {
            None
        }
    }
}

/// Returns the mirror reflection ray for an intersection. It stays in the
/// medium the incident ray travelled through.
///
/// * `isect` - The intersection.
pub fn specular_reflection_ray(isect: &Intersection) -> Ray {
    Ray::new(isect.p, reflect(&isect.wo, &isect.sn), RayType::SpecularReflection)
        .with_pixel(isect.pixel)
        .with_eta(isect.incident_eta)
        .adjust_origin(&isect.gn)
}

/// Returns the refracted ray for an intersection with a dielectric of index
/// `eta`. A ray travelling in a medium of index 1 is entering the object,
/// otherwise it is leaving into vacuum. On total internal reflection the
/// mirror direction is returned, tagged as a specular reflection.
///
/// * `isect` - The intersection.
/// * `eta`   - Index of refraction of the object.
pub fn specular_transmission_ray(isect: &Intersection, eta: Float) -> Ray {
    let incident_eta = isect.incident_eta;
    let new_eta = if incident_eta == 1.0 { eta } else { 1.0 };
    let ior = incident_eta / new_eta;

    let cos_theta = clamp(isect.sn.dot(&isect.wo), -1.0, 1.0);
    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();

    let ray = if ior * sin_theta > 1.0 {
        Ray::new(isect.p, reflect(&isect.wo, &isect.sn), RayType::SpecularReflection)
            .with_eta(incident_eta)
    } else {
        Ray::new(isect.p, refract(&-isect.wo, &isect.sn, ior), RayType::SpecularTransmission)
            .with_eta(new_eta)
    };

    ray.with_pixel(isect.pixel).adjust_origin(&-isect.gn)
}

/// Returns a cosine distributed ray about the shading normal, the cosine of
/// its angle with the normal and its density.
///
/// * `isect` - The intersection.
/// * `u`     - The random sample point.
pub fn diffuse_reflection_ray(isect: &Intersection, u: &Point2f) -> (Ray, Float, Float) {
    let (local, pdf) = cosine_sample_hemisphere(u);
    let (x, y) = coordinate_system(&isect.sn);
    let dir = local_to_world(&local, &x, &y, &isect.sn);

    let ray = Ray::new(isect.p, dir, RayType::DiffuseReflection)
        .with_pixel(isect.pixel)
        .with_eta(isect.incident_eta)
        .adjust_origin(&isect.sn);

    (ray, local.z, pdf)
}

/// Recursive path tracer. Each call estimates the radiance leaving one
/// intersection, adding direct lighting at diffuse surfaces and following
/// one scattering lobe chosen at random, with Russian roulette bounding
/// the recursion.
pub struct PathTracer<'a> {
    /// The scene.
    scene: &'a Scene,

    /// Settings.
    config: PathTracerConfig,
}

impl<'a> PathTracer<'a> {
    /// Create a new `PathTracer`.
    ///
    /// * `scene`  - The scene.
    /// * `config` - Settings.
    pub fn new(scene: &'a Scene, config: PathTracerConfig) -> Self {
        Self { scene, config }
    }

    /// Trace a secondary ray and shade what it hits.
    fn trace(&self, ray: &Ray, depth: usize, rng: &mut RNG) -> RGBSpectrum {
        let isect = self.scene.trace(ray);
        self.shade(isect.as_ref(), depth, rng)
    }

    fn specular_reflection(&self, isect: &Intersection, brdf: &Brdf, depth: usize, rng: &mut RNG) -> RGBSpectrum {
        let ray = specular_reflection_ray(isect);
        brdf.ks * self.trace(&ray, depth + 1, rng)
    }

    fn specular_transmission(&self, isect: &Intersection, brdf: &Brdf, depth: usize, rng: &mut RNG) -> RGBSpectrum {
        let ray = specular_transmission_ray(isect, brdf.eta);
        brdf.kt * self.trace(&ray, depth + 1, rng)
    }

    fn diffuse_reflection(&self, isect: &Intersection, material: &Material, depth: usize, rng: &mut RNG) -> RGBSpectrum {
        let u = rng.uniform_point2f();
        let (ray, cos_theta, pdf) = diffuse_reflection_ray(isect, &u);
        if !(pdf > 0.0) {
            return RGBSpectrum::ZERO;
        }

        // Emitters reached here are already counted by direct lighting.
        match self.scene.trace(&ray) {
            Some(hit) if hit.is_light => RGBSpectrum::ZERO,
            hit => {
                let l = self.shade(hit.as_ref(), depth + 1, rng);
                material.diffuse(&isect.uv) * l * cos_theta / pdf
            }
        }
    }

    /// Recursive branch: pick one lobe and return its estimate divided by
    /// the probability of picking it.
    fn scatter(&self, isect: &Intersection, material: &Material, depth: usize, rng: &mut RNG) -> RGBSpectrum {
        let brdf = material.brdf();
        let lobes = match LobeDistribution::new(brdf) {
            Some(lobes) => lobes,
            None => return RGBSpectrum::ZERO,
        };

        match lobes.select(brdf, rng.uniform_float(), isect.ray_type) {
            Some((lobe, pdf)) => {
                debug!("Depth {depth}: sampled {lobe:?} with probability {pdf}");
                let c = match lobe {
                    Lobe::SpecularReflection => self.specular_reflection(isect, brdf, depth, rng),
                    Lobe::SpecularTransmission => self.specular_transmission(isect, brdf, depth, rng),
                    Lobe::DiffuseReflection => self.diffuse_reflection(isect, material, depth, rng),
                };
                c / pdf
            }
            None => RGBSpectrum::ZERO,
        }
    }
}

impl<'a> Shader for PathTracer<'a> {
    fn shade(&self, isect: Option<&Intersection>, depth: usize, rng: &mut RNG) -> RGBSpectrum {
        let isect = match isect {
            Some(isect) => isect,
            None => return self.config.background,
        };
        if isect.is_light {
            return isect.le;
        }
        let material = match isect.material.as_ref() {
            Some(material) => material,
            None => {
                warn!("Intersection without material at {}", isect.p);
                return RGBSpectrum::ZERO;
            }
        };
        let brdf = material.brdf();

        let PathTracerConfig {
            min_depth,
            continue_prob,
            max_depth,
            ..
        } = self.config;

        let mut color = RGBSpectrum::ZERO;

        // Russian roulette.
        let cont = rng.uniform_float();
        if depth < max_depth && (depth < min_depth || cont < continue_prob) {
            color += self.scatter(isect, material, depth, rng);
            if depth >= min_depth {
                color /= continue_prob;
            }
        }

        if !brdf.kd.is_black() {
            color += direct_lighting(self.scene, isect, material, rng, self.config.light_sample_mode);
        }

        color
    }
}
