//! RGB Spectrum

use crate::pbrt::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Sub};

/// Rec. 709 luminance weights.
const LUMINANCE_WEIGHTS: [Float; 3] = [0.2126, 0.7152, 0.0722];

/// Radiance or reflectance sampled at red, green and blue.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBSpectrum {
    /// Red.
    pub r: Float,

    /// Green.
    pub g: Float,

    /// Blue.
    pub b: Float,
}

impl RGBSpectrum {
    /// Black.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// White.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a new `RGBSpectrum`.
    ///
    /// * `r` - Red.
    /// * `g` - Green.
    /// * `b` - Blue.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Create a grey `RGBSpectrum` with all channels set to `v`.
    ///
    /// * `v` - Value.
    pub const fn grey(v: Float) -> Self {
        Self::new(v, v, v)
    }

    /// Returns the luminance (the Y coordinate of CIE XYZ).
    pub fn y(&self) -> Float {
        LUMINANCE_WEIGHTS[0] * self.r + LUMINANCE_WEIGHTS[1] * self.g + LUMINANCE_WEIGHTS[2] * self.b
    }

    /// Returns true if every channel is within `ZERO_THRESHOLD` of zero.
    pub fn is_black(&self) -> bool {
        abs(self.r) < ZERO_THRESHOLD && abs(self.g) < ZERO_THRESHOLD && abs(self.b) < ZERO_THRESHOLD
    }

    /// Returns true if any channel is NaN.
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Returns true if every channel is finite.
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Returns the smallest channel value.
    pub fn min_component_value(&self) -> Float {
        min(self.r, min(self.g, self.b))
    }

    /// Clamp every channel to `[low, high]`.
    ///
    /// * `low`  - Lower bound.
    /// * `high` - Upper bound.
    pub fn clamp(&self, low: Float, high: Float) -> Self {
        Self::new(
            clamp(self.r, low, high),
            clamp(self.g, low, high),
            clamp(self.b, low, high),
        )
    }

    /// Returns the channels as an array.
    pub fn to_rgb(&self) -> [Float; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[Float; 3]> for RGBSpectrum {
    fn from(rgb: [Float; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl Add for RGBSpectrum {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBSpectrum {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for RGBSpectrum {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

impl Mul for RGBSpectrum {
    type Output = Self;

    /// Channel-wise product.
    fn mul(self, other: Self) -> Self::Output {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = Self;

    fn mul(self, f: Float) -> Self::Output {
        Self::new(self.r * f, self.g * f, self.b * f)
    }
}

impl Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    fn mul(self, s: RGBSpectrum) -> Self::Output {
        s * self
    }
}

impl MulAssign for RGBSpectrum {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<Float> for RGBSpectrum {
    fn mul_assign(&mut self, f: Float) {
        *self = *self * f;
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = Self;

    fn div(self, f: Float) -> Self::Output {
        debug_assert!(f != 0.0);
        let inv = 1.0 / f;
        self * inv
    }
}

impl DivAssign<Float> for RGBSpectrum {
    fn div_assign(&mut self, f: Float) {
        *self = *self / f;
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;

    /// Index the channels by 0, 1, 2.
    ///
    /// * `i` - The channel index.
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Invalid index for RGBSpectrum"),
        }
    }
}

impl std::iter::Sum for RGBSpectrum {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, s| acc + s)
    }
}

impl fmt::Display for RGBSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.r, self.g, self.b)
    }
}
