//! Ambient Light

use crate::spectrum::*;

/// Non-directional light that reaches every point unoccluded.
#[derive(Clone, Debug)]
pub struct AmbientLight {
    /// Radiance.
    pub l: RGBSpectrum,
}

impl AmbientLight {
    /// Returns a new `AmbientLight`.
    ///
    /// * `l` - Radiance.
    pub fn new(l: RGBSpectrum) -> Self {
        Self { l }
    }

    /// Returns the emitted radiance.
    pub fn sample_l(&self) -> RGBSpectrum {
        self.l
    }
}
