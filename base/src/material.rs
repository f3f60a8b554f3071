//! Material

use crate::geometry::*;
use crate::pbrt::*;
use crate::spectrum::*;
use crate::texture::*;
use std::fmt;
use std::sync::Arc;

/// Phong-like surface response split into four weighted lobes. Weights are
/// non-negative; a black weight disables its lobe.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Brdf {
    /// Ambient reflectance.
    pub ka: RGBSpectrum,

    /// Diffuse reflectance.
    pub kd: RGBSpectrum,

    /// Specular (mirror) reflectance.
    pub ks: RGBSpectrum,

    /// Specular transmittance.
    pub kt: RGBSpectrum,

    /// Index of refraction of the interior medium.
    pub eta: Float,
}

impl Brdf {
    /// Returns a purely diffuse response with a matching ambient term.
    ///
    /// * `kd` - Diffuse reflectance.
    pub fn diffuse(kd: RGBSpectrum) -> Self {
        Self {
            ka: kd,
            kd,
            eta: 1.0,
            ..Default::default()
        }
    }

    /// Returns a perfect mirror.
    ///
    /// * `ks` - Specular reflectance.
    pub fn mirror(ks: RGBSpectrum) -> Self {
        Self {
            ks,
            eta: 1.0,
            ..Default::default()
        }
    }

    /// Returns a clear dielectric with a faint reflection.
    ///
    /// * `kt`  - Specular transmittance.
    /// * `ks`  - Specular reflectance.
    /// * `eta` - Index of refraction.
    pub fn glass(kt: RGBSpectrum, ks: RGBSpectrum, eta: Float) -> Self {
        Self {
            kt,
            ks,
            eta,
            ..Default::default()
        }
    }
}

/// Surface materials.
#[derive(Clone)]
pub enum Material {
    /// Constant lobe weights over the whole surface.
    Brdf(Brdf),

    /// Diffuse weight looked up per texel; the remaining lobes are constant.
    Textured {
        /// Lobe weights. `kd` is used for lobe selection.
        brdf: Brdf,

        /// Diffuse texture.
        texture: ArcTexture,
    },
}

impl Material {
    /// Returns the lobe weights.
    pub fn brdf(&self) -> &Brdf {
        match self {
            Self::Brdf(brdf) => brdf,
            Self::Textured { brdf, .. } => brdf,
        }
    }

    /// Returns the diffuse reflectance at the given texture coordinates.
    ///
    /// * `uv` - Texture coordinates.
    pub fn diffuse(&self, uv: &Point2f) -> RGBSpectrum {
        match self {
            Self::Brdf(brdf) => brdf.kd,
            Self::Textured { texture, .. } => texture.evaluate(uv),
        }
    }
}

impl From<Brdf> for Material {
    fn from(brdf: Brdf) -> Self {
        Self::Brdf(brdf)
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brdf(brdf) => f.debug_tuple("Brdf").field(brdf).finish(),
            Self::Textured { brdf, .. } => f.debug_struct("Textured").field("brdf", brdf).finish(),
        }
    }
}

/// Atomic reference counted `Material`.
pub type ArcMaterial = Arc<Material>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_diffuse_ignores_uv() {
        let m = Material::from(Brdf::diffuse(RGBSpectrum::grey(0.8)));
        assert_eq!(m.diffuse(&Point2f::new(0.3, 0.7)), RGBSpectrum::grey(0.8));
    }

    #[test]
    fn textured_diffuse_uses_texture() {
        let texture: ArcTexture = Arc::new(CheckerboardTexture::new(
            RGBSpectrum::ZERO,
            RGBSpectrum::ONE,
            2.0,
            2.0,
        ));
        let m = Material::Textured {
            brdf: Brdf::diffuse(RGBSpectrum::grey(0.5)),
            texture,
        };
        assert_eq!(m.diffuse(&Point2f::new(0.1, 0.1)), RGBSpectrum::ZERO);
        assert_eq!(m.diffuse(&Point2f::new(0.6, 0.1)), RGBSpectrum::ONE);
        assert_eq!(m.brdf().kd, RGBSpectrum::grey(0.5));
    }
}
