//! Rays

use super::{Normal3f, Point2i, Point3f, Vector3f};
use crate::pbrt::*;
use std::fmt;

/// The kind of light transport event that spawned a ray.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RayType {
    /// Primary ray leaving the camera.
    Camera,

    /// Mirror reflection off a specular surface.
    SpecularReflection,

    /// Refraction through a transmissive surface.
    SpecularTransmission,

    /// Cosine-weighted bounce off a diffuse surface.
    DiffuseReflection,

    /// Occlusion query towards a light.
    Shadow,
}

impl fmt::Display for RayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera => write!(f, "camera"),
            Self::SpecularReflection => write!(f, "specular-reflection"),
            Self::SpecularTransmission => write!(f, "specular-transmission"),
            Self::DiffuseReflection => write!(f, "diffuse-reflection"),
            Self::Shadow => write!(f, "shadow"),
        }
    }
}

/// A Ray
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    /// Origin.
    pub o: Point3f,

    /// Direction (normalized).
    pub d: Vector3f,

    /// Maximum extent of the ray.
    pub t_max: Float,

    /// Pixel the ray contributes to.
    pub pixel: Point2i,

    /// Transport event that created the ray.
    pub ray_type: RayType,

    /// Index of refraction of the medium the ray travels through.
    pub propagating_eta: Float,
}

impl Ray {
    /// Returns a new ray in vacuum with unbounded extent. The direction is
    /// normalized.
    ///
    /// * `o`        - Origin.
    /// * `d`        - Direction.
    /// * `ray_type` - Transport event that created the ray.
    pub fn new(o: Point3f, d: Vector3f, ray_type: RayType) -> Self {
        Self {
            o,
            d: d.normalize(),
            t_max: INFINITY,
            pixel: Point2i::zero(),
            ray_type,
            propagating_eta: 1.0,
        }
    }

    /// Tag the ray with the pixel it contributes to.
    ///
    /// * `pixel` - Pixel coordinates.
    pub fn with_pixel(mut self, pixel: Point2i) -> Self {
        self.pixel = pixel;
        self
    }

    /// Set the index of refraction of the medium the ray travels through.
    ///
    /// * `eta` - Index of refraction.
    pub fn with_eta(mut self, eta: Float) -> Self {
        self.propagating_eta = eta;
        self
    }

    /// Limit the extent of the ray.
    ///
    /// * `t_max` - Maximum extent.
    pub fn with_t_max(mut self, t_max: Float) -> Self {
        self.t_max = t_max;
        self
    }

    /// Push the origin `EPSILON` along `n`, flipped to the side the ray
    /// travels towards, so the spawning surface is not hit again.
    ///
    /// * `n` - Normal at the origin.
    pub fn adjust_origin(mut self, n: &Normal3f) -> Self {
        let mut offset = EPSILON * *n;
        if self.d.dot(n) < 0.0 {
            offset = -offset;
        }
        self.o += offset;
        self
    }

    /// Get position along the ray at given parameter.
    ///
    /// * `t` - Parameter to evaluate.
    pub fn at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[o={}, d={}, t_max={}, {} @ {}, eta={}]",
            self.o, self.d, self.t_max, self.ray_type, self.pixel, self.propagating_eta
        )
    }
}
