//! Checkerboard

use super::*;
use crate::pbrt::*;

/// Implements a checkerboard texture that alternates between two values
/// in texture space.
#[derive(Clone)]
pub struct CheckerboardTexture {
    /// Value of the even checks.
    tex1: RGBSpectrum,

    /// Value of the odd checks.
    tex2: RGBSpectrum,

    /// Number of checks along `u`.
    su: Float,

    /// Number of checks along `v`.
    sv: Float,
}

impl CheckerboardTexture {
    /// Create a new `CheckerboardTexture`.
    ///
    /// * `tex1` - Value of the even checks.
    /// * `tex2` - Value of the odd checks.
    /// * `su`   - Number of checks along `u`.
    /// * `sv`   - Number of checks along `v`.
    pub fn new(tex1: RGBSpectrum, tex2: RGBSpectrum, su: Float, sv: Float) -> Self {
        Self { tex1, tex2, su, sv }
    }
}

impl Texture for CheckerboardTexture {
    fn evaluate(&self, uv: &Point2f) -> RGBSpectrum {
        let s = (uv.x * self.su).floor() as Int;
        let t = (uv.y * self.sv).floor() as Int;
        if (s + t).rem_euclid(2) == 0 {
            self.tex1
        } else {
            self.tex2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates() {
        let black = RGBSpectrum::ZERO;
        let white = RGBSpectrum::ONE;
        let t = CheckerboardTexture::new(black, white, 4.0, 4.0);
        assert_eq!(t.evaluate(&Point2f::new(0.1, 0.1)), black);
        assert_eq!(t.evaluate(&Point2f::new(0.3, 0.1)), white);
        assert_eq!(t.evaluate(&Point2f::new(0.3, 0.3)), black);
        assert_eq!(t.evaluate(&Point2f::new(-0.1, 0.1)), white);
    }
}
