//! Direct Lighting Shader

use crate::direct_lighting::*;
use base::integrator::*;
use base::interaction::*;
use base::light::*;
use base::rng::*;
use base::scene::*;
use base::spectrum::*;

/// Shades surfaces with direct lighting only. Emitters show their radiance
/// and escaped rays the background; nothing is traced beyond the first hit.
pub struct DirectShader<'a> {
    /// The scene.
    scene: &'a Scene,

    /// Radiance returned by rays that leave the scene.
    background: RGBSpectrum,

    /// Light sampling policy.
    light_sample_mode: LightSampleMode,
}

impl<'a> DirectShader<'a> {
    /// Create a new `DirectShader`.
    ///
    /// * `scene`             - The scene.
    /// * `background`        - Background radiance.
    /// * `light_sample_mode` - Light sampling policy.
    pub fn new(scene: &'a Scene, background: RGBSpectrum, light_sample_mode: LightSampleMode) -> Self {
        Self {
            scene,
            background,
            light_sample_mode,
        }
    }
}

impl<'a> Shader for DirectShader<'a> {
    fn shade(&self, isect: Option<&Intersection>, _depth: usize, rng: &mut RNG) -> RGBSpectrum {
        let isect = match isect {
            Some(isect) => isect,
            None => return self.background,
        };
        if isect.is_light {
            return isect.le;
        }

        match isect.material.as_ref() {
            Some(material) if !material.brdf().kd.is_black() => {
                direct_lighting(self.scene, isect, material, rng, self.light_sample_mode)
            }
            _ => RGBSpectrum::ZERO,
        }
    }
}
